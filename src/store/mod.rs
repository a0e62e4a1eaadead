//! Storage ports. Services depend on these traits only; `PgStore` backs them
//! with PostgreSQL and `MemoryStore` keeps everything in process.

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::enums::{CycleStatus, GoalType};
use crate::db::models::*;
use crate::error::AppResult;

pub trait DimensionStore {
    fn insert_dimension(&self, new_dimension: &NewDimension) -> AppResult<Dimension>;
    fn list_dimensions(&self, user_id: Uuid) -> AppResult<Vec<Dimension>>;
    fn find_dimension(&self, dimension_id: Uuid) -> AppResult<Option<Dimension>>;
    fn update_dimension(&self, dimension_id: Uuid, changes: &DimensionChanges) -> AppResult<Dimension>;

    fn list_active_dimensions(&self, user_id: Uuid) -> AppResult<Vec<Dimension>> {
        let mut dims = self.list_dimensions(user_id)?;
        dims.retain(|d| d.is_active);
        Ok(dims)
    }
}

pub trait CycleStore {
    fn insert_cycles(&self, new_cycles: &[NewCycle]) -> AppResult<Vec<Cycle>>;
    /// Ordered by cycle number.
    fn list_cycles(&self, user_id: Uuid) -> AppResult<Vec<Cycle>>;
    fn has_cycles(&self, user_id: Uuid) -> AppResult<bool>;
    fn find_cycle(&self, cycle_id: Uuid) -> AppResult<Option<Cycle>>;
    /// Cycles of every user whose status is not yet `completed`.
    fn list_open_cycles(&self) -> AppResult<Vec<Cycle>>;
    fn update_cycle_progress(
        &self,
        cycle_id: Uuid,
        completion_rate: i32,
        status: CycleStatus,
    ) -> AppResult<Cycle>;
}

pub trait RecordStore {
    fn find_record(&self, key: &RecordKey) -> AppResult<Option<Record>>;
    fn find_record_by_id(&self, record_id: Uuid) -> AppResult<Option<Record>>;
    fn upsert_record(&self, new_record: &NewRecord) -> AppResult<Record>;
    fn list_records(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Record>>;
    /// Distinct `(dimension_id, record_date)` pairs of published records within the inclusive range.
    fn published_slots(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<(Uuid, NaiveDate)>>;
}

pub trait GoalStore {
    fn insert_goal(&self, new_goal: &NewGoal) -> AppResult<Goal>;
    fn find_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<Goal>>;
    fn list_goals(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Goal>>;
    fn list_daily_goals(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Goal>>;
    fn delete_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<bool>;
}

pub trait EvaluationStore {
    fn find_evaluation(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<GoalEvaluation>>;
    fn insert_evaluation(&self, new_evaluation: &NewGoalEvaluation) -> AppResult<GoalEvaluation>;
    fn apply_review(&self, evaluation_id: Uuid, review: &EvaluationReview) -> AppResult<GoalEvaluation>;
    fn list_evaluations(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<GoalEvaluation>>;
    fn list_all_evaluations(&self, user_id: Uuid) -> AppResult<Vec<GoalEvaluation>>;
}

pub trait ExpenseStore {
    fn insert_expenses(&self, new_expenses: &[NewExpense]) -> AppResult<Vec<Expense>>;
    fn list_expenses(&self, user_id: Uuid, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Expense>>;
    fn delete_expense(&self, user_id: Uuid, expense_id: Uuid) -> AppResult<bool>;
}

/// One profile per user.
pub trait ProfileStore {
    fn find_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;
    fn insert_profile(&self, new_profile: &NewUserProfile) -> AppResult<UserProfile>;
    fn update_profile(&self, user_id: Uuid, changes: &ProfileChanges) -> AppResult<UserProfile>;
}

/// Everything the services need, as one bound.
pub trait Store:
    DimensionStore + CycleStore + RecordStore + GoalStore + EvaluationStore + ExpenseStore + ProfileStore
{
}

impl<T> Store for T where
    T: DimensionStore
        + CycleStore
        + RecordStore
        + GoalStore
        + EvaluationStore
        + ExpenseStore
        + ProfileStore
{
}
