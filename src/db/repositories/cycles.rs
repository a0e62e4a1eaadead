use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

use crate::db::enums::CycleStatus;
use crate::db::models::cycle::{Cycle, NewCycle};

pub struct CyclesRepo;

impl CyclesRepo {
    pub fn insert_batch(
        conn: &mut PgConnection,
        new_cycles: &[NewCycle],
    ) -> Result<Vec<Cycle>, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        let mut inserted = diesel::insert_into(cycles)
            .values(new_cycles)
            .get_results::<Cycle>(conn)?;
        inserted.sort_by_key(|c| c.cycle_number);
        Ok(inserted)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
    ) -> Result<Vec<Cycle>, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        cycles
            .filter(user_id.eq(uid))
            .order(cycle_number.asc())
            .load::<Cycle>(conn)
    }

    pub fn exists_for_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        diesel::select(diesel::dsl::exists(cycles.filter(user_id.eq(uid)))).get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        cycle_id: uuid::Uuid,
    ) -> Result<Option<Cycle>, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        cycles
            .filter(id.eq(cycle_id))
            .first::<Cycle>(conn)
            .optional()
    }

    /// Every cycle that has not reached its terminal status, across all users.
    pub fn list_open(conn: &mut PgConnection) -> Result<Vec<Cycle>, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        cycles
            .filter(status.ne(CycleStatus::Completed))
            .order((user_id.asc(), cycle_number.asc()))
            .load::<Cycle>(conn)
    }

    pub fn update_progress(
        conn: &mut PgConnection,
        cycle_id: uuid::Uuid,
        rate: i32,
        new_status: CycleStatus,
    ) -> Result<Cycle, diesel::result::Error> {
        use crate::schema::cycles::dsl::*;
        diesel::update(cycles.filter(id.eq(cycle_id)))
            .set((
                completion_rate.eq(rate),
                status.eq(new_status),
                updated_at.eq(Utc::now()),
            ))
            .get_result::<Cycle>(conn)
    }
}
