use crate::db::enums::GoalType;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::goal_evaluations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalEvaluation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub goal_id: Uuid,
    pub goal_type: GoalType,
    pub dimension_id: Uuid,
    pub ai_score: f64,
    pub ai_analysis: String,
    pub user_score: Option<f64>,
    pub user_comment: Option<String>,
    pub final_score: f64,
    pub evaluated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::goal_evaluations)]
pub struct NewGoalEvaluation {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub goal_id: Uuid,
    pub goal_type: GoalType,
    pub dimension_id: Uuid,
    pub ai_score: f64,
    pub ai_analysis: String,
    pub user_score: Option<f64>,
    pub user_comment: Option<String>,
    pub final_score: f64,
}

/// Human-side revision of an existing evaluation. The AI fields are never part of it.
#[derive(AsChangeset, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::goal_evaluations)]
#[diesel(treat_none_as_null = true)]
pub struct EvaluationReview {
    pub user_score: Option<f64>,
    pub user_comment: Option<String>,
    pub final_score: f64,
}
