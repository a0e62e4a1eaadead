use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::models::expense::{Expense, NewExpense};
use crate::domain::report::{ExpenseSummary, summarize_expenses};
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::services::cycles_service::CyclesService;
use crate::store::{ExpenseStore, Store};
use crate::validation::expense::validate_expense_item;

#[derive(Deserialize, Debug, Clone)]
pub struct ExpenseItem {
    pub category: String,
    pub item_name: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SaveExpensesRequest {
    pub cycle_id: Uuid,
    pub record_id: Option<Uuid>,
    pub items: Vec<ExpenseItem>,
}

pub struct ExpensesService;

impl ExpensesService {
    /// Saves every item or none of them.
    pub fn save_batch<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &SaveExpensesRequest,
    ) -> AppResult<Vec<Expense>> {
        if req.items.is_empty() {
            return Err(AppError::validation("At least one expense item is required"));
        }
        let cycle = CyclesService::get_by_id(store, ctx, req.cycle_id)?;
        if let Some(record_id) = req.record_id {
            let linked = store
                .find_record_by_id(record_id)?
                .filter(|r| r.user_id == ctx.user_id)
                .ok_or_else(|| AppError::not_found("record"))?;
            if linked.cycle_id != cycle.id {
                return Err(AppError::validation("Linked record belongs to another cycle"));
            }
        }

        let mut new_expenses = Vec::with_capacity(req.items.len());
        for item in &req.items {
            validate_expense_item(
                &cycle,
                &item.category,
                &item.item_name,
                item.amount,
                item.expense_date,
            )?;
            new_expenses.push(NewExpense {
                user_id: ctx.user_id,
                cycle_id: cycle.id,
                record_id: req.record_id,
                category: item.category.trim().to_string(),
                item_name: item.item_name.trim().to_string(),
                amount: item.amount,
                expense_date: item.expense_date,
            });
        }

        let saved = store.insert_expenses(&new_expenses)?;
        tracing::info!(user_id = %ctx.user_id, cycle_id = %cycle.id, count = saved.len(), "Expenses saved");
        Ok(saved)
    }

    pub fn list_range<S: ExpenseStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Expense>> {
        if from > to {
            return Err(AppError::invalid_range(format!(
                "Range start {} is after its end {}",
                from, to
            )));
        }
        store.list_expenses(ctx.user_id, from, to)
    }

    pub fn summary<S: ExpenseStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<ExpenseSummary> {
        let expenses = Self::list_range(store, ctx, from, to)?;
        Ok(summarize_expenses(&expenses))
    }

    pub fn delete<S: ExpenseStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        expense_id: Uuid,
    ) -> AppResult<()> {
        if !store.delete_expense(ctx.user_id, expense_id)? {
            return Err(AppError::not_found("expense"));
        }
        tracing::info!(user_id = %ctx.user_id, expense_id = %expense_id, "Expense deleted");
        Ok(())
    }
}
