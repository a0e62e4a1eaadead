use crate::db::enums::RecordStatus;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Record {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub record_date: NaiveDate,
    pub content: String,
    pub word_count: i32,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            user_id: self.user_id,
            cycle_id: self.cycle_id,
            dimension_id: self.dimension_id,
            record_date: self.record_date,
        }
    }
}

/// Upsert key: at most one record per user, cycle, dimension and day.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub record_date: NaiveDate,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::records)]
pub struct NewRecord {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub record_date: NaiveDate,
    pub content: String,
    pub word_count: i32,
    pub status: RecordStatus,
}

impl NewRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            user_id: self.user_id,
            cycle_id: self.cycle_id,
            dimension_id: self.dimension_id,
            record_date: self.record_date,
        }
    }
}
