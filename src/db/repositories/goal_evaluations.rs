use chrono::Utc;
use diesel::prelude::*;

use crate::db::enums::GoalType;
use crate::db::models::goal_evaluation::{EvaluationReview, GoalEvaluation, NewGoalEvaluation};

pub struct GoalEvaluationsRepo;

impl GoalEvaluationsRepo {
    pub fn find_by_goal(
        conn: &mut PgConnection,
        gid: uuid::Uuid,
        gtype: GoalType,
    ) -> Result<Option<GoalEvaluation>, diesel::result::Error> {
        use crate::schema::goal_evaluations::dsl::*;
        goal_evaluations
            .filter(goal_id.eq(gid))
            .filter(goal_type.eq(gtype))
            .first::<GoalEvaluation>(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_evaluation: &NewGoalEvaluation,
    ) -> Result<GoalEvaluation, diesel::result::Error> {
        diesel::insert_into(crate::schema::goal_evaluations::table)
            .values(new_evaluation)
            .get_result(conn)
    }

    pub fn apply_review(
        conn: &mut PgConnection,
        evaluation_id: uuid::Uuid,
        review: &EvaluationReview,
    ) -> Result<GoalEvaluation, diesel::result::Error> {
        use crate::schema::goal_evaluations::dsl::*;
        diesel::update(goal_evaluations.filter(id.eq(evaluation_id)))
            .set((review, updated_at.eq(Utc::now())))
            .get_result::<GoalEvaluation>(conn)
    }

    pub fn list_by_cycle(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        cid: uuid::Uuid,
    ) -> Result<Vec<GoalEvaluation>, diesel::result::Error> {
        use crate::schema::goal_evaluations::dsl::*;
        goal_evaluations
            .filter(user_id.eq(uid))
            .filter(cycle_id.eq(cid))
            .load::<GoalEvaluation>(conn)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
    ) -> Result<Vec<GoalEvaluation>, diesel::result::Error> {
        use crate::schema::goal_evaluations::dsl::*;
        goal_evaluations
            .filter(user_id.eq(uid))
            .load::<GoalEvaluation>(conn)
    }
}
