use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{GoalType, TargetType};
use crate::db::models::goal::{Goal, NewGoal};
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::services::cycles_service::CyclesService;
use crate::services::dimensions_service::DimensionsService;
use crate::store::{GoalStore, Store};
use crate::validation::goal::{GoalShape, validate_create_goal};

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateGoalRequest {
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub goal_type: GoalType,
    pub goal_date: Option<NaiveDate>,
    #[validate(custom(function = "crate::validation::rules::validate_not_blank"))]
    pub content: String,
    #[serde(default)]
    pub evaluation_criteria: String,
    pub target_type: TargetType,
    pub target_value: Option<f64>,
    #[validate(length(max = 50, message = "Target unit must be at most 50 characters"))]
    pub target_unit: Option<String>,
}

pub struct GoalsService;

impl GoalsService {
    pub fn create<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &CreateGoalRequest,
    ) -> AppResult<Goal> {
        req.validate()?;

        let cycle = CyclesService::get_by_id(store, ctx, req.cycle_id)?;
        let dimension = DimensionsService::get_by_id(store, ctx, req.dimension_id)?;
        validate_create_goal(
            &cycle,
            &GoalShape {
                goal_type: req.goal_type,
                goal_date: req.goal_date,
                content: &req.content,
                target_type: req.target_type,
                target_value: req.target_value,
            },
        )?;

        let goal = store.insert_goal(&NewGoal {
            user_id: ctx.user_id,
            cycle_id: cycle.id,
            dimension_id: dimension.id,
            goal_type: req.goal_type,
            goal_date: req.goal_date,
            content: req.content.trim().to_string(),
            evaluation_criteria: req.evaluation_criteria.trim().to_string(),
            target_type: req.target_type,
            // qualitative goals carry no target
            target_value: match req.target_type {
                TargetType::Quantitative => req.target_value,
                TargetType::Qualitative => None,
            },
            target_unit: req.target_unit.clone(),
        })?;

        tracing::info!(
            user_id = %ctx.user_id,
            goal_id = %goal.id,
            goal_type = goal.goal_type.as_str(),
            cycle_id = %cycle.id,
            "Goal created"
        );
        Ok(goal)
    }

    pub fn get<S: GoalStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        goal_id: Uuid,
        goal_type: GoalType,
    ) -> AppResult<Goal> {
        store
            .find_goal(goal_id, goal_type)?
            .filter(|g| g.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("goal"))
    }

    pub fn list_for_cycle<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
    ) -> AppResult<Vec<Goal>> {
        let cycle = CyclesService::get_by_id(store, ctx, cycle_id)?;
        store.list_goals(ctx.user_id, cycle.id)
    }

    pub fn list_for_date<S: GoalStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        date: NaiveDate,
    ) -> AppResult<Vec<Goal>> {
        store.list_daily_goals(ctx.user_id, date)
    }

    /// Removes the goal together with its evaluation.
    pub fn delete<S: GoalStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        goal_id: Uuid,
        goal_type: GoalType,
    ) -> AppResult<()> {
        let goal = Self::get(store, ctx, goal_id, goal_type)?;
        if !store.delete_goal(goal.id, goal.goal_type)? {
            return Err(AppError::not_found("goal"));
        }
        tracing::info!(user_id = %ctx.user_id, goal_id = %goal.id, "Goal deleted");
        Ok(())
    }
}
