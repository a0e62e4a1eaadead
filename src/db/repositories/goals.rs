use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::enums::GoalType;
use crate::db::models::goal::{Goal, NewGoal};

pub struct GoalsRepo;

impl GoalsRepo {
    pub fn insert(conn: &mut PgConnection, new_goal: &NewGoal) -> Result<Goal, diesel::result::Error> {
        diesel::insert_into(crate::schema::goals::table)
            .values(new_goal)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        gid: uuid::Uuid,
        gtype: GoalType,
    ) -> Result<Option<Goal>, diesel::result::Error> {
        use crate::schema::goals::dsl::*;
        goals
            .filter(id.eq(gid))
            .filter(goal_type.eq(gtype))
            .first::<Goal>(conn)
            .optional()
    }

    pub fn list_by_cycle(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        cid: uuid::Uuid,
    ) -> Result<Vec<Goal>, diesel::result::Error> {
        use crate::schema::goals::dsl::*;
        goals
            .filter(user_id.eq(uid))
            .filter(cycle_id.eq(cid))
            .order(created_at.asc())
            .load::<Goal>(conn)
    }

    pub fn list_daily_by_date(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Goal>, diesel::result::Error> {
        use crate::schema::goals::dsl::*;
        goals
            .filter(user_id.eq(uid))
            .filter(goal_type.eq(GoalType::Daily))
            .filter(goal_date.eq(date))
            .order(created_at.asc())
            .load::<Goal>(conn)
    }

    /// Removes the goal together with its evaluation.
    pub fn delete_by_id(
        conn: &mut PgConnection,
        gid: uuid::Uuid,
        gtype: GoalType,
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            {
                use crate::schema::goal_evaluations::dsl as ge;
                diesel::delete(
                    ge::goal_evaluations
                        .filter(ge::goal_id.eq(gid))
                        .filter(ge::goal_type.eq(gtype)),
                )
                .execute(conn)?;
            }
            use crate::schema::goals::dsl::*;
            diesel::delete(goals.filter(id.eq(gid)).filter(goal_type.eq(gtype))).execute(conn)
        })
    }
}
