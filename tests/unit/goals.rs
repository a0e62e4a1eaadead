use tenday_backend::db::enums::{GoalType, TargetType};
use tenday_backend::db::models::Goal;
use tenday_backend::error::AppError;
use tenday_backend::services::evaluations_service::EvaluateGoalRequest;
use tenday_backend::services::goals_service::CreateGoalRequest;
use tenday_backend::services::{EvaluationsService, GoalsService};

use super::{Journal, d, journal};

pub fn cycle_goal(j: &Journal, cycle: usize, dim: usize, content: &str) -> Goal {
    GoalsService::create(
        &j.store,
        &j.ctx,
        &CreateGoalRequest {
            cycle_id: j.cycles[cycle].id,
            dimension_id: j.dimensions[dim].id,
            goal_type: GoalType::Cycle,
            goal_date: None,
            content: content.to_string(),
            evaluation_criteria: "judged at cycle end".to_string(),
            target_type: TargetType::Qualitative,
            target_value: None,
            target_unit: None,
        },
    )
    .unwrap()
}

fn daily(j: &Journal, day: u32, target_value: Option<f64>) -> Result<Goal, AppError> {
    GoalsService::create(
        &j.store,
        &j.ctx,
        &CreateGoalRequest {
            cycle_id: j.cycles[0].id,
            dimension_id: j.dimensions[0].id,
            goal_type: GoalType::Daily,
            goal_date: Some(d(2026, 1, day)),
            content: "walk".to_string(),
            evaluation_criteria: String::new(),
            target_type: TargetType::Quantitative,
            target_value,
            target_unit: Some("steps".to_string()),
        },
    )
}

#[test]
fn daily_goals_are_listed_by_date() {
    let j = journal(d(2026, 1, 2));
    daily(&j, 3, Some(8000.0)).unwrap();
    daily(&j, 3, Some(9000.0)).unwrap();
    daily(&j, 4, Some(10000.0)).unwrap();
    cycle_goal(&j, 0, 1, "ship the release");

    assert_eq!(GoalsService::list_for_date(&j.store, &j.ctx, d(2026, 1, 3)).unwrap().len(), 2);
    assert_eq!(GoalsService::list_for_cycle(&j.store, &j.ctx, j.cycles[0].id).unwrap().len(), 4);
}

#[test]
fn goal_shape_is_enforced() {
    let j = journal(d(2026, 1, 2));
    assert!(matches!(daily(&j, 12, Some(1.0)), Err(AppError::Validation { .. })));
    assert!(matches!(daily(&j, 3, None), Err(AppError::Validation { .. })));
    assert!(matches!(daily(&j, 3, Some(0.0)), Err(AppError::Validation { .. })));
}

#[test]
fn goal_lookup_is_keyed_by_type() {
    let j = journal(d(2026, 1, 2));
    let goal = cycle_goal(&j, 0, 0, "sleep before midnight");
    assert!(GoalsService::get(&j.store, &j.ctx, goal.id, GoalType::Cycle).is_ok());
    assert!(matches!(
        GoalsService::get(&j.store, &j.ctx, goal.id, GoalType::Daily),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn deleting_a_goal_removes_its_evaluation() {
    let j = journal(d(2026, 1, 2));
    let goal = cycle_goal(&j, 0, 0, "read two books");
    EvaluationsService::evaluate(
        &j.store,
        &j.ctx,
        &EvaluateGoalRequest {
            goal_id: goal.id,
            goal_type: GoalType::Cycle,
            ai_score: 60.0,
            ai_analysis: "one book finished".to_string(),
            user_score: None,
            user_comment: None,
        },
    )
    .unwrap();

    GoalsService::delete(&j.store, &j.ctx, goal.id, GoalType::Cycle).unwrap();
    assert!(EvaluationsService::list_for_cycle(&j.store, &j.ctx, j.cycles[0].id).unwrap().is_empty());
    assert!(GoalsService::delete(&j.store, &j.ctx, goal.id, GoalType::Cycle).is_err());
}
