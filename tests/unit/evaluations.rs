use tenday_backend::db::enums::GoalType;
use tenday_backend::domain::scoring::EvaluationState;
use tenday_backend::error::AppError;
use tenday_backend::services::EvaluationsService;
use tenday_backend::services::evaluations_service::EvaluateGoalRequest;

use super::goals::cycle_goal;
use super::{d, journal};

fn request(goal_id: uuid::Uuid, ai: f64, user: Option<f64>) -> EvaluateGoalRequest {
    EvaluateGoalRequest {
        goal_id,
        goal_type: GoalType::Cycle,
        ai_score: ai,
        ai_analysis: "ran four times".to_string(),
        user_score: user,
        user_comment: None,
    }
}

#[test]
fn ai_score_then_user_review() {
    let j = journal(d(2026, 1, 12));
    let goal = cycle_goal(&j, 0, 0, "run four times");

    let view = EvaluationsService::get_for_goal(&j.store, &j.ctx, goal.id, GoalType::Cycle).unwrap();
    assert_eq!(view.state, EvaluationState::Unevaluated);

    let first = EvaluationsService::evaluate(&j.store, &j.ctx, &request(goal.id, 85.0, None)).unwrap();
    assert_eq!(first.final_score, 85.0);
    let view = EvaluationsService::get_for_goal(&j.store, &j.ctx, goal.id, GoalType::Cycle).unwrap();
    assert_eq!(view.state, EvaluationState::AiScored);

    let mut review = request(goal.id, 85.0, Some(75.0));
    review.user_comment = Some("missed one run".to_string());
    let reviewed = EvaluationsService::evaluate(&j.store, &j.ctx, &review).unwrap();
    assert_eq!(reviewed.id, first.id);
    assert_eq!(reviewed.final_score, 80.0);
    assert_eq!(reviewed.user_comment.as_deref(), Some("missed one run"));

    let view = EvaluationsService::get_for_goal(&j.store, &j.ctx, goal.id, GoalType::Cycle).unwrap();
    assert_eq!(view.state, EvaluationState::UserReviewed);
    assert_eq!(EvaluationsService::list_for_cycle(&j.store, &j.ctx, j.cycles[0].id).unwrap().len(), 1);
}

#[test]
fn ai_score_is_not_overwritten() {
    let j = journal(d(2026, 1, 12));
    let goal = cycle_goal(&j, 0, 0, "journal daily");
    EvaluationsService::evaluate(&j.store, &j.ctx, &request(goal.id, 90.0, None)).unwrap();

    let again = EvaluationsService::evaluate(&j.store, &j.ctx, &request(goal.id, 10.0, Some(70.0))).unwrap();
    assert_eq!(again.ai_score, 90.0);
    assert_eq!(again.final_score, 80.0);
}

#[test]
fn out_of_range_scores_write_nothing() {
    let j = journal(d(2026, 1, 12));
    let goal = cycle_goal(&j, 0, 0, "cook at home");

    assert!(matches!(
        EvaluationsService::evaluate(&j.store, &j.ctx, &request(goal.id, 101.0, None)),
        Err(AppError::InvalidScore { .. })
    ));
    assert!(matches!(
        EvaluationsService::evaluate(&j.store, &j.ctx, &request(goal.id, 50.0, Some(-0.5))),
        Err(AppError::InvalidScore { .. })
    ));
    let view = EvaluationsService::get_for_goal(&j.store, &j.ctx, goal.id, GoalType::Cycle).unwrap();
    assert!(view.evaluation.is_none());
}
