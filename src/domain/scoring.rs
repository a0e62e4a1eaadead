//! Goal scoring: folds the AI score and an optional human score into the
//! final score of an evaluation, and decides how an evaluation is written.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::GoalType;
use crate::db::models::{EvaluationReview, GoalEvaluation, NewGoalEvaluation};
use crate::error::{AppError, AppResult};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

pub fn validate_score(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(AppError::invalid_score(field, value))
    }
}

/// Unweighted mean of both scores, or the AI score alone before human review.
pub fn final_score(ai_score: f64, user_score: Option<f64>) -> f64 {
    match user_score {
        Some(user) => (ai_score + user) / 2.0,
        None => ai_score,
    }
}

/// `final_score` behind the range check applied at every write boundary.
pub fn score(ai_score: f64, user_score: Option<f64>) -> AppResult<f64> {
    validate_score("ai_score", ai_score)?;
    if let Some(user) = user_score {
        validate_score("user_score", user)?;
    }
    Ok(final_score(ai_score, user_score))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationState {
    Unevaluated,
    AiScored,
    UserReviewed,
}

impl EvaluationState {
    pub fn of(evaluation: Option<&GoalEvaluation>) -> Self {
        match evaluation {
            None => EvaluationState::Unevaluated,
            Some(e) if e.user_score.is_some() => EvaluationState::UserReviewed,
            Some(_) => EvaluationState::AiScored,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        !matches!(self, EvaluationState::Unevaluated)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationInput {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub goal_id: Uuid,
    pub goal_type: GoalType,
    pub dimension_id: Uuid,
    pub ai_score: f64,
    pub ai_analysis: String,
    pub user_score: Option<f64>,
    pub user_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationWrite {
    Insert(NewGoalEvaluation),
    Review {
        evaluation_id: Uuid,
        review: EvaluationReview,
    },
}

/// Decides between creating the evaluation for `(goal_id, goal_type)` and
/// revising the human side of the existing one. The AI score and analysis of
/// an existing evaluation are kept as recorded; a missing `user_score` keeps
/// the previous human score.
pub fn plan_upsert(
    existing: Option<&GoalEvaluation>,
    input: EvaluationInput,
) -> AppResult<EvaluationWrite> {
    validate_score("ai_score", input.ai_score)?;
    if let Some(user) = input.user_score {
        validate_score("user_score", user)?;
    }

    match existing {
        Some(current) => {
            if current.goal_id != input.goal_id || current.goal_type != input.goal_type {
                return Err(AppError::internal(format!(
                    "evaluation {} does not belong to goal {} ({})",
                    current.id,
                    input.goal_id,
                    input.goal_type.as_str()
                )));
            }
            let user_score = input.user_score.or(current.user_score);
            let user_comment = input.user_comment.or_else(|| current.user_comment.clone());
            Ok(EvaluationWrite::Review {
                evaluation_id: current.id,
                review: EvaluationReview {
                    user_score,
                    user_comment,
                    final_score: final_score(current.ai_score, user_score),
                },
            })
        }
        None => {
            let final_score = final_score(input.ai_score, input.user_score);
            Ok(EvaluationWrite::Insert(NewGoalEvaluation {
                user_id: input.user_id,
                cycle_id: input.cycle_id,
                goal_id: input.goal_id,
                goal_type: input.goal_type,
                dimension_id: input.dimension_id,
                ai_score: input.ai_score,
                ai_analysis: input.ai_analysis,
                user_score: input.user_score,
                user_comment: input.user_comment,
                final_score,
            }))
        }
    }
}
