use chrono::NaiveDate;

use crate::db::models::Cycle;
use crate::error::AppError;

pub fn validate_expense_item(
    cycle: &Cycle,
    category: &str,
    item_name: &str,
    amount: f64,
    expense_date: NaiveDate,
) -> Result<(), AppError> {
    if category.trim().is_empty() {
        return Err(AppError::validation("Expense category is required"));
    }
    if item_name.trim().is_empty() {
        return Err(AppError::validation("Expense item name is required"));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::validation("Expense amount must be a non-negative number"));
    }
    if !cycle.contains(expense_date) {
        return Err(AppError::validation(format!(
            "Expense date {} is outside cycle {}",
            expense_date, cycle.cycle_number
        )));
    }
    Ok(())
}
