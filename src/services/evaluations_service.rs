use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::GoalType;
use crate::db::models::goal_evaluation::GoalEvaluation;
use crate::domain::scoring::{EvaluationInput, EvaluationState, EvaluationWrite, plan_upsert};
use crate::error::AppResult;
use crate::services::context::RequestContext;
use crate::services::cycles_service::CyclesService;
use crate::services::goals_service::GoalsService;
use crate::store::{EvaluationStore, GoalStore, Store};
use crate::validation::evaluation::validate_evaluation;

#[derive(Deserialize, Debug, Clone)]
pub struct EvaluateGoalRequest {
    pub goal_id: Uuid,
    pub goal_type: GoalType,
    pub ai_score: f64,
    pub ai_analysis: String,
    pub user_score: Option<f64>,
    pub user_comment: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GoalEvaluationView {
    pub goal_id: Uuid,
    pub goal_type: GoalType,
    pub state: EvaluationState,
    pub evaluation: Option<GoalEvaluation>,
}

pub struct EvaluationsService;

impl EvaluationsService {
    /// Records the evaluation of a goal. The first call stores the AI score
    /// and analysis; later calls only revise the human score and comment.
    pub fn evaluate<S: GoalStore + EvaluationStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &EvaluateGoalRequest,
    ) -> AppResult<GoalEvaluation> {
        validate_evaluation(req.ai_score, &req.ai_analysis, req.user_score)?;
        let goal = GoalsService::get(store, ctx, req.goal_id, req.goal_type)?;

        let existing = store.find_evaluation(goal.id, goal.goal_type)?;
        let write = plan_upsert(
            existing.as_ref(),
            EvaluationInput {
                user_id: ctx.user_id,
                cycle_id: goal.cycle_id,
                goal_id: goal.id,
                goal_type: goal.goal_type,
                dimension_id: goal.dimension_id,
                ai_score: req.ai_score,
                ai_analysis: req.ai_analysis.clone(),
                user_score: req.user_score,
                user_comment: req.user_comment.clone(),
            },
        )?;

        let saved = match write {
            EvaluationWrite::Insert(new_evaluation) => store.insert_evaluation(&new_evaluation)?,
            EvaluationWrite::Review { evaluation_id, review } => {
                store.apply_review(evaluation_id, &review)?
            }
        };

        tracing::info!(
            user_id = %ctx.user_id,
            goal_id = %goal.id,
            goal_type = goal.goal_type.as_str(),
            final_score = saved.final_score,
            reviewed = saved.user_score.is_some(),
            "Goal evaluated"
        );
        Ok(saved)
    }

    pub fn get_for_goal<S: GoalStore + EvaluationStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        goal_id: Uuid,
        goal_type: GoalType,
    ) -> AppResult<GoalEvaluationView> {
        let goal = GoalsService::get(store, ctx, goal_id, goal_type)?;
        let evaluation = store.find_evaluation(goal.id, goal.goal_type)?;
        Ok(GoalEvaluationView {
            goal_id: goal.id,
            goal_type: goal.goal_type,
            state: EvaluationState::of(evaluation.as_ref()),
            evaluation,
        })
    }

    pub fn list_for_cycle<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
    ) -> AppResult<Vec<GoalEvaluation>> {
        let cycle = CyclesService::get_by_id(store, ctx, cycle_id)?;
        store.list_evaluations(ctx.user_id, cycle.id)
    }
}
