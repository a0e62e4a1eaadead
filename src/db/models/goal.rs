use crate::db::enums::{GoalType, TargetType};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Cycle goals carry no goal_date; daily goals always do.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub goal_type: GoalType,
    pub goal_date: Option<NaiveDate>,
    pub content: String,
    pub evaluation_criteria: String,
    pub target_type: TargetType,
    pub target_value: Option<f64>,
    pub target_unit: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoal {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub goal_type: GoalType,
    pub goal_date: Option<NaiveDate>,
    pub content: String,
    pub evaluation_criteria: String,
    pub target_type: TargetType,
    pub target_value: Option<f64>,
    pub target_unit: Option<String>,
}
