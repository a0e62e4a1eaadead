use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::enums::{CycleStatus, GoalType};
use crate::db::models::*;
use crate::error::{AppError, AppResult};
use crate::store::{
    CycleStore, DimensionStore, EvaluationStore, ExpenseStore, GoalStore, ProfileStore, RecordStore,
};

#[derive(Default)]
struct Tables {
    dimensions: HashMap<Uuid, Dimension>,
    cycles: HashMap<Uuid, Cycle>,
    records: HashMap<RecordKey, Record>,
    goals: HashMap<Uuid, Goal>,
    evaluations: HashMap<Uuid, GoalEvaluation>,
    expenses: HashMap<Uuid, Expense>,
    profiles: HashMap<Uuid, UserProfile>,
}

/// In-process store with the same schema as the relational one. Used for
/// local development and by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::internal("memory store lock poisoned"))
    }
}

impl DimensionStore for MemoryStore {
    fn insert_dimension(&self, new_dimension: &NewDimension) -> AppResult<Dimension> {
        let now = Utc::now();
        let dimension = Dimension {
            id: Uuid::new_v4(),
            user_id: new_dimension.user_id,
            name: new_dimension.name.clone(),
            color_code: new_dimension.color_code.clone(),
            icon_name: new_dimension.icon_name.clone(),
            display_order: new_dimension.display_order,
            is_active: new_dimension.is_active,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.dimensions.insert(dimension.id, dimension.clone());
        Ok(dimension)
    }

    fn list_dimensions(&self, user_id: Uuid) -> AppResult<Vec<Dimension>> {
        let mut list: Vec<Dimension> = self
            .lock()?
            .dimensions
            .values()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|d| d.display_order);
        Ok(list)
    }

    fn find_dimension(&self, dimension_id: Uuid) -> AppResult<Option<Dimension>> {
        Ok(self.lock()?.dimensions.get(&dimension_id).cloned())
    }

    fn update_dimension(&self, dimension_id: Uuid, changes: &DimensionChanges) -> AppResult<Dimension> {
        let mut tables = self.lock()?;
        let dimension = tables
            .dimensions
            .get_mut(&dimension_id)
            .ok_or_else(|| AppError::not_found("dimension"))?;
        if let Some(name) = &changes.name {
            dimension.name = name.clone();
        }
        if let Some(color) = &changes.color_code {
            dimension.color_code = color.clone();
        }
        if let Some(icon) = &changes.icon_name {
            dimension.icon_name = icon.clone();
        }
        if let Some(order) = changes.display_order {
            dimension.display_order = order;
        }
        if let Some(active) = changes.is_active {
            dimension.is_active = active;
        }
        dimension.updated_at = Utc::now();
        Ok(dimension.clone())
    }
}

impl CycleStore for MemoryStore {
    fn insert_cycles(&self, new_cycles: &[NewCycle]) -> AppResult<Vec<Cycle>> {
        let now = Utc::now();
        let mut tables = self.lock()?;
        let mut inserted = Vec::with_capacity(new_cycles.len());
        for new_cycle in new_cycles {
            let cycle = Cycle {
                id: Uuid::new_v4(),
                user_id: new_cycle.user_id,
                cycle_number: new_cycle.cycle_number,
                start_date: new_cycle.start_date,
                end_date: new_cycle.end_date,
                total_days: new_cycle.total_days,
                completion_rate: new_cycle.completion_rate,
                status: new_cycle.status,
                created_at: now,
                updated_at: now,
            };
            tables.cycles.insert(cycle.id, cycle.clone());
            inserted.push(cycle);
        }
        inserted.sort_by_key(|c| c.cycle_number);
        Ok(inserted)
    }

    fn list_cycles(&self, user_id: Uuid) -> AppResult<Vec<Cycle>> {
        let mut list: Vec<Cycle> = self
            .lock()?
            .cycles
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|c| c.cycle_number);
        Ok(list)
    }

    fn has_cycles(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.lock()?.cycles.values().any(|c| c.user_id == user_id))
    }

    fn find_cycle(&self, cycle_id: Uuid) -> AppResult<Option<Cycle>> {
        Ok(self.lock()?.cycles.get(&cycle_id).cloned())
    }

    fn list_open_cycles(&self) -> AppResult<Vec<Cycle>> {
        let mut list: Vec<Cycle> = self
            .lock()?
            .cycles
            .values()
            .filter(|c| c.status != CycleStatus::Completed)
            .cloned()
            .collect();
        list.sort_by_key(|c| (c.user_id, c.cycle_number));
        Ok(list)
    }

    fn update_cycle_progress(
        &self,
        cycle_id: Uuid,
        completion_rate: i32,
        status: CycleStatus,
    ) -> AppResult<Cycle> {
        let mut tables = self.lock()?;
        let cycle = tables
            .cycles
            .get_mut(&cycle_id)
            .ok_or_else(|| AppError::not_found("cycle"))?;
        cycle.completion_rate = completion_rate;
        cycle.status = status;
        cycle.updated_at = Utc::now();
        Ok(cycle.clone())
    }
}

impl RecordStore for MemoryStore {
    fn find_record(&self, key: &RecordKey) -> AppResult<Option<Record>> {
        Ok(self.lock()?.records.get(key).cloned())
    }

    fn find_record_by_id(&self, record_id: Uuid) -> AppResult<Option<Record>> {
        Ok(self
            .lock()?
            .records
            .values()
            .find(|r| r.id == record_id)
            .cloned())
    }

    fn upsert_record(&self, new_record: &NewRecord) -> AppResult<Record> {
        let now = Utc::now();
        let mut tables = self.lock()?;
        let record = tables
            .records
            .entry(new_record.key())
            .and_modify(|existing| {
                existing.content = new_record.content.clone();
                existing.word_count = new_record.word_count;
                existing.status = new_record.status;
                existing.updated_at = now;
            })
            .or_insert_with(|| Record {
                id: Uuid::new_v4(),
                user_id: new_record.user_id,
                cycle_id: new_record.cycle_id,
                dimension_id: new_record.dimension_id,
                record_date: new_record.record_date,
                content: new_record.content.clone(),
                word_count: new_record.word_count,
                status: new_record.status,
                created_at: now,
                updated_at: now,
            });
        Ok(record.clone())
    }

    fn list_records(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Record>> {
        let mut list: Vec<Record> = self
            .lock()?
            .records
            .values()
            .filter(|r| r.user_id == user_id && r.cycle_id == cycle_id)
            .cloned()
            .collect();
        list.sort_by_key(|r| (r.record_date, r.dimension_id));
        Ok(list)
    }

    fn published_slots(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<(Uuid, NaiveDate)>> {
        let slots: BTreeSet<(Uuid, NaiveDate)> = self
            .lock()?
            .records
            .values()
            .filter(|r| {
                r.user_id == user_id
                    && r.status.is_published()
                    && from <= r.record_date
                    && r.record_date <= to
            })
            .map(|r| (r.dimension_id, r.record_date))
            .collect();
        Ok(slots.into_iter().collect())
    }
}

impl GoalStore for MemoryStore {
    fn insert_goal(&self, new_goal: &NewGoal) -> AppResult<Goal> {
        let now = Utc::now();
        let goal = Goal {
            id: Uuid::new_v4(),
            user_id: new_goal.user_id,
            cycle_id: new_goal.cycle_id,
            dimension_id: new_goal.dimension_id,
            goal_type: new_goal.goal_type,
            goal_date: new_goal.goal_date,
            content: new_goal.content.clone(),
            evaluation_criteria: new_goal.evaluation_criteria.clone(),
            target_type: new_goal.target_type,
            target_value: new_goal.target_value,
            target_unit: new_goal.target_unit.clone(),
            created_at: now,
            updated_at: now,
        };
        self.lock()?.goals.insert(goal.id, goal.clone());
        Ok(goal)
    }

    fn find_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<Goal>> {
        Ok(self
            .lock()?
            .goals
            .get(&goal_id)
            .filter(|g| g.goal_type == goal_type)
            .cloned())
    }

    fn list_goals(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Goal>> {
        let mut list: Vec<Goal> = self
            .lock()?
            .goals
            .values()
            .filter(|g| g.user_id == user_id && g.cycle_id == cycle_id)
            .cloned()
            .collect();
        list.sort_by_key(|g| g.created_at);
        Ok(list)
    }

    fn list_daily_goals(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Goal>> {
        let mut list: Vec<Goal> = self
            .lock()?
            .goals
            .values()
            .filter(|g| {
                g.user_id == user_id && g.goal_type == GoalType::Daily && g.goal_date == Some(date)
            })
            .cloned()
            .collect();
        list.sort_by_key(|g| g.created_at);
        Ok(list)
    }

    fn delete_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<bool> {
        let mut tables = self.lock()?;
        let matches = tables
            .goals
            .get(&goal_id)
            .is_some_and(|g| g.goal_type == goal_type);
        if !matches {
            return Ok(false);
        }
        tables.goals.remove(&goal_id);
        tables
            .evaluations
            .retain(|_, e| !(e.goal_id == goal_id && e.goal_type == goal_type));
        Ok(true)
    }
}

impl EvaluationStore for MemoryStore {
    fn find_evaluation(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<GoalEvaluation>> {
        Ok(self
            .lock()?
            .evaluations
            .values()
            .find(|e| e.goal_id == goal_id && e.goal_type == goal_type)
            .cloned())
    }

    fn insert_evaluation(&self, new_evaluation: &NewGoalEvaluation) -> AppResult<GoalEvaluation> {
        let now = Utc::now();
        let evaluation = GoalEvaluation {
            id: Uuid::new_v4(),
            user_id: new_evaluation.user_id,
            cycle_id: new_evaluation.cycle_id,
            goal_id: new_evaluation.goal_id,
            goal_type: new_evaluation.goal_type,
            dimension_id: new_evaluation.dimension_id,
            ai_score: new_evaluation.ai_score,
            ai_analysis: new_evaluation.ai_analysis.clone(),
            user_score: new_evaluation.user_score,
            user_comment: new_evaluation.user_comment.clone(),
            final_score: new_evaluation.final_score,
            evaluated_at: now,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.evaluations.insert(evaluation.id, evaluation.clone());
        Ok(evaluation)
    }

    fn apply_review(&self, evaluation_id: Uuid, review: &EvaluationReview) -> AppResult<GoalEvaluation> {
        let mut tables = self.lock()?;
        let evaluation = tables
            .evaluations
            .get_mut(&evaluation_id)
            .ok_or_else(|| AppError::not_found("goal evaluation"))?;
        evaluation.user_score = review.user_score;
        evaluation.user_comment = review.user_comment.clone();
        evaluation.final_score = review.final_score;
        evaluation.updated_at = Utc::now();
        Ok(evaluation.clone())
    }

    fn list_evaluations(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<GoalEvaluation>> {
        Ok(self
            .lock()?
            .evaluations
            .values()
            .filter(|e| e.user_id == user_id && e.cycle_id == cycle_id)
            .cloned()
            .collect())
    }

    fn list_all_evaluations(&self, user_id: Uuid) -> AppResult<Vec<GoalEvaluation>> {
        Ok(self
            .lock()?
            .evaluations
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl ExpenseStore for MemoryStore {
    fn insert_expenses(&self, new_expenses: &[NewExpense]) -> AppResult<Vec<Expense>> {
        let now = Utc::now();
        let mut tables = self.lock()?;
        let mut inserted = Vec::with_capacity(new_expenses.len());
        for new_expense in new_expenses {
            let expense = Expense {
                id: Uuid::new_v4(),
                user_id: new_expense.user_id,
                cycle_id: new_expense.cycle_id,
                record_id: new_expense.record_id,
                category: new_expense.category.clone(),
                item_name: new_expense.item_name.clone(),
                amount: new_expense.amount,
                expense_date: new_expense.expense_date,
                created_at: now,
                updated_at: now,
            };
            tables.expenses.insert(expense.id, expense.clone());
            inserted.push(expense);
        }
        Ok(inserted)
    }

    fn list_expenses(&self, user_id: Uuid, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Expense>> {
        let mut list: Vec<Expense> = self
            .lock()?
            .expenses
            .values()
            .filter(|e| e.user_id == user_id && from <= e.expense_date && e.expense_date <= to)
            .cloned()
            .collect();
        list.sort_by_key(|e| e.expense_date);
        Ok(list)
    }

    fn delete_expense(&self, user_id: Uuid, expense_id: Uuid) -> AppResult<bool> {
        let mut tables = self.lock()?;
        let owned = tables
            .expenses
            .get(&expense_id)
            .is_some_and(|e| e.user_id == user_id);
        if owned {
            tables.expenses.remove(&expense_id);
        }
        Ok(owned)
    }
}

impl ProfileStore for MemoryStore {
    fn find_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.lock()?.profiles.get(&user_id).cloned())
    }

    fn insert_profile(&self, new_profile: &NewUserProfile) -> AppResult<UserProfile> {
        let now = Utc::now();
        let mut tables = self.lock()?;
        if tables.profiles.contains_key(&new_profile.user_id) {
            return Err(AppError::conflict_with_code(
                "Profile already exists",
                None,
                "PROFILE_EXISTS",
            ));
        }
        let profile = UserProfile {
            id: Uuid::new_v4(),
            user_id: new_profile.user_id,
            nickname: new_profile.nickname.clone(),
            avatar_url: new_profile.avatar_url.clone(),
            ai_service_provider: new_profile.ai_service_provider.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(profile.user_id, profile.clone());
        Ok(profile)
    }

    fn update_profile(&self, user_id: Uuid, changes: &ProfileChanges) -> AppResult<UserProfile> {
        let mut tables = self.lock()?;
        let profile = tables
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found("profile"))?;
        if let Some(nickname) = &changes.nickname {
            profile.nickname = nickname.clone();
        }
        if let Some(avatar_url) = &changes.avatar_url {
            profile.avatar_url = avatar_url.clone();
        }
        if let Some(provider) = &changes.ai_service_provider {
            profile.ai_service_provider = provider.clone();
        }
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }
}
