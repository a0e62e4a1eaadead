use chrono::NaiveDate;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use uuid::Uuid;

use crate::db::DbPool;
use crate::db::enums::{CycleStatus, GoalType};
use crate::db::models::*;
use crate::db::repositories::*;
use crate::error::{AppError, AppResult};
use crate::store::{
    CycleStore, DimensionStore, EvaluationStore, ExpenseStore, GoalStore, ProfileStore, RecordStore,
};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> AppResult<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool.get().map_err(AppError::from)
    }
}

impl DimensionStore for PgStore {
    fn insert_dimension(&self, new_dimension: &NewDimension) -> AppResult<Dimension> {
        Ok(DimensionsRepo::insert(&mut *self.conn()?, new_dimension)?)
    }

    fn list_dimensions(&self, user_id: Uuid) -> AppResult<Vec<Dimension>> {
        Ok(DimensionsRepo::list_by_user(&mut *self.conn()?, user_id)?)
    }

    fn find_dimension(&self, dimension_id: Uuid) -> AppResult<Option<Dimension>> {
        Ok(DimensionsRepo::find_by_id(&mut *self.conn()?, dimension_id)?)
    }

    fn update_dimension(&self, dimension_id: Uuid, changes: &DimensionChanges) -> AppResult<Dimension> {
        Ok(DimensionsRepo::update_fields(&mut *self.conn()?, dimension_id, changes)?)
    }
}

impl CycleStore for PgStore {
    fn insert_cycles(&self, new_cycles: &[NewCycle]) -> AppResult<Vec<Cycle>> {
        Ok(CyclesRepo::insert_batch(&mut *self.conn()?, new_cycles)?)
    }

    fn list_cycles(&self, user_id: Uuid) -> AppResult<Vec<Cycle>> {
        Ok(CyclesRepo::list_by_user(&mut *self.conn()?, user_id)?)
    }

    fn has_cycles(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(CyclesRepo::exists_for_user(&mut *self.conn()?, user_id)?)
    }

    fn find_cycle(&self, cycle_id: Uuid) -> AppResult<Option<Cycle>> {
        Ok(CyclesRepo::find_by_id(&mut *self.conn()?, cycle_id)?)
    }

    fn list_open_cycles(&self) -> AppResult<Vec<Cycle>> {
        Ok(CyclesRepo::list_open(&mut *self.conn()?)?)
    }

    fn update_cycle_progress(
        &self,
        cycle_id: Uuid,
        completion_rate: i32,
        status: CycleStatus,
    ) -> AppResult<Cycle> {
        Ok(CyclesRepo::update_progress(
            &mut *self.conn()?,
            cycle_id,
            completion_rate,
            status,
        )?)
    }
}

impl RecordStore for PgStore {
    fn find_record(&self, key: &RecordKey) -> AppResult<Option<Record>> {
        Ok(RecordsRepo::find_by_key(&mut *self.conn()?, key)?)
    }

    fn find_record_by_id(&self, record_id: Uuid) -> AppResult<Option<Record>> {
        Ok(RecordsRepo::find_by_id(&mut *self.conn()?, record_id)?)
    }

    fn upsert_record(&self, new_record: &NewRecord) -> AppResult<Record> {
        Ok(RecordsRepo::upsert(&mut *self.conn()?, new_record)?)
    }

    fn list_records(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Record>> {
        Ok(RecordsRepo::list_by_cycle(&mut *self.conn()?, user_id, cycle_id)?)
    }

    fn published_slots(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<(Uuid, NaiveDate)>> {
        Ok(RecordsRepo::published_slots(&mut *self.conn()?, user_id, from, to)?)
    }
}

impl GoalStore for PgStore {
    fn insert_goal(&self, new_goal: &NewGoal) -> AppResult<Goal> {
        Ok(GoalsRepo::insert(&mut *self.conn()?, new_goal)?)
    }

    fn find_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<Goal>> {
        Ok(GoalsRepo::find_by_id(&mut *self.conn()?, goal_id, goal_type)?)
    }

    fn list_goals(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<Goal>> {
        Ok(GoalsRepo::list_by_cycle(&mut *self.conn()?, user_id, cycle_id)?)
    }

    fn list_daily_goals(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Goal>> {
        Ok(GoalsRepo::list_daily_by_date(&mut *self.conn()?, user_id, date)?)
    }

    fn delete_goal(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<bool> {
        Ok(GoalsRepo::delete_by_id(&mut *self.conn()?, goal_id, goal_type)? > 0)
    }
}

impl EvaluationStore for PgStore {
    fn find_evaluation(&self, goal_id: Uuid, goal_type: GoalType) -> AppResult<Option<GoalEvaluation>> {
        Ok(GoalEvaluationsRepo::find_by_goal(&mut *self.conn()?, goal_id, goal_type)?)
    }

    fn insert_evaluation(&self, new_evaluation: &NewGoalEvaluation) -> AppResult<GoalEvaluation> {
        Ok(GoalEvaluationsRepo::insert(&mut *self.conn()?, new_evaluation)?)
    }

    fn apply_review(&self, evaluation_id: Uuid, review: &EvaluationReview) -> AppResult<GoalEvaluation> {
        Ok(GoalEvaluationsRepo::apply_review(&mut *self.conn()?, evaluation_id, review)?)
    }

    fn list_evaluations(&self, user_id: Uuid, cycle_id: Uuid) -> AppResult<Vec<GoalEvaluation>> {
        Ok(GoalEvaluationsRepo::list_by_cycle(&mut *self.conn()?, user_id, cycle_id)?)
    }

    fn list_all_evaluations(&self, user_id: Uuid) -> AppResult<Vec<GoalEvaluation>> {
        Ok(GoalEvaluationsRepo::list_by_user(&mut *self.conn()?, user_id)?)
    }
}

impl ExpenseStore for PgStore {
    fn insert_expenses(&self, new_expenses: &[NewExpense]) -> AppResult<Vec<Expense>> {
        Ok(ExpensesRepo::insert_batch(&mut *self.conn()?, new_expenses)?)
    }

    fn list_expenses(&self, user_id: Uuid, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Expense>> {
        Ok(ExpensesRepo::list_by_date_range(&mut *self.conn()?, user_id, from, to)?)
    }

    fn delete_expense(&self, user_id: Uuid, expense_id: Uuid) -> AppResult<bool> {
        Ok(ExpensesRepo::delete_by_id(&mut *self.conn()?, user_id, expense_id)? > 0)
    }
}

impl ProfileStore for PgStore {
    fn find_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(UserProfilesRepo::find_by_user(&mut *self.conn()?, user_id)?)
    }

    fn insert_profile(&self, new_profile: &NewUserProfile) -> AppResult<UserProfile> {
        Ok(UserProfilesRepo::insert(&mut *self.conn()?, new_profile)?)
    }

    fn update_profile(&self, user_id: Uuid, changes: &ProfileChanges) -> AppResult<UserProfile> {
        Ok(UserProfilesRepo::update_by_user(&mut *self.conn()?, user_id, changes)?)
    }
}
