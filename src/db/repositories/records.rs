use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::db::enums::RecordStatus;
use crate::db::models::record::{NewRecord, Record, RecordKey};

pub struct RecordsRepo;

impl RecordsRepo {
    pub fn find_by_key(
        conn: &mut PgConnection,
        key: &RecordKey,
    ) -> Result<Option<Record>, diesel::result::Error> {
        use crate::schema::records::dsl::*;
        records
            .filter(user_id.eq(key.user_id))
            .filter(cycle_id.eq(key.cycle_id))
            .filter(dimension_id.eq(key.dimension_id))
            .filter(record_date.eq(key.record_date))
            .first::<Record>(conn)
            .optional()
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        record_id: uuid::Uuid,
    ) -> Result<Option<Record>, diesel::result::Error> {
        use crate::schema::records::dsl::*;
        records
            .filter(id.eq(record_id))
            .first::<Record>(conn)
            .optional()
    }

    /// Relies on the unique index over `(user_id, cycle_id, dimension_id, record_date)`.
    pub fn upsert(
        conn: &mut PgConnection,
        new_record: &NewRecord,
    ) -> Result<Record, diesel::result::Error> {
        use crate::schema::records::dsl::*;
        diesel::insert_into(records)
            .values(new_record)
            .on_conflict((user_id, cycle_id, dimension_id, record_date))
            .do_update()
            .set((
                content.eq(excluded(content)),
                word_count.eq(excluded(word_count)),
                status.eq(excluded(status)),
                updated_at.eq(Utc::now()),
            ))
            .get_result::<Record>(conn)
    }

    pub fn list_by_cycle(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        cid: uuid::Uuid,
    ) -> Result<Vec<Record>, diesel::result::Error> {
        use crate::schema::records::dsl::*;
        records
            .filter(user_id.eq(uid))
            .filter(cycle_id.eq(cid))
            .order((record_date.asc(), dimension_id.asc()))
            .load::<Record>(conn)
    }

    pub fn published_slots(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(uuid::Uuid, NaiveDate)>, diesel::result::Error> {
        use crate::schema::records::dsl::*;
        records
            .filter(user_id.eq(uid))
            .filter(status.eq(RecordStatus::Published))
            .filter(record_date.between(from, to))
            .select((dimension_id, record_date))
            .distinct()
            .load::<(uuid::Uuid, NaiveDate)>(conn)
    }
}
