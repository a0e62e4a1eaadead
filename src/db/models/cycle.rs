use crate::db::enums::CycleStatus;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::cycles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cycle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i32,
    pub completion_rate: i32,
    pub status: CycleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cycle {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::cycles)]
pub struct NewCycle {
    pub user_id: Uuid,
    pub cycle_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i32,
    pub completion_rate: i32,
    pub status: CycleStatus,
}
