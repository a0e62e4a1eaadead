use chrono::NaiveDate;

use crate::db::enums::{GoalType, TargetType};
use crate::db::models::Cycle;
use crate::error::AppError;

pub struct GoalShape<'a> {
    pub goal_type: GoalType,
    pub goal_date: Option<NaiveDate>,
    pub content: &'a str,
    pub target_type: TargetType,
    pub target_value: Option<f64>,
}

pub fn validate_create_goal(cycle: &Cycle, goal: &GoalShape) -> Result<(), AppError> {
    if goal.content.trim().is_empty() {
        return Err(AppError::validation("Goal content is required"));
    }
    match (goal.goal_type, goal.goal_date) {
        (GoalType::Cycle, Some(_)) => {
            return Err(AppError::validation("Cycle goals cannot have a goal date"));
        }
        (GoalType::Daily, None) => {
            return Err(AppError::validation("Daily goals need a goal date"));
        }
        (GoalType::Daily, Some(date)) if !cycle.contains(date) => {
            return Err(AppError::validation(format!(
                "Goal date {} is outside cycle {}",
                date, cycle.cycle_number
            )));
        }
        _ => {}
    }
    if goal.target_type == TargetType::Quantitative {
        match goal.target_value {
            Some(v) if v.is_finite() && v > 0.0 => {}
            _ => {
                return Err(AppError::validation(
                    "Quantitative goals need a positive target value",
                ));
            }
        }
    }
    Ok(())
}
