use chrono::Utc;
use diesel::prelude::*;

use crate::db::models::dimension::{Dimension, DimensionChanges, NewDimension};

pub struct DimensionsRepo;

impl DimensionsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_dimension: &NewDimension,
    ) -> Result<Dimension, diesel::result::Error> {
        diesel::insert_into(crate::schema::dimensions::table)
            .values(new_dimension)
            .get_result(conn)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
    ) -> Result<Vec<Dimension>, diesel::result::Error> {
        use crate::schema::dimensions::dsl::*;
        dimensions
            .filter(user_id.eq(uid))
            .order(display_order.asc())
            .load::<Dimension>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        dimension_id: uuid::Uuid,
    ) -> Result<Option<Dimension>, diesel::result::Error> {
        use crate::schema::dimensions::dsl::*;
        dimensions
            .filter(id.eq(dimension_id))
            .first::<Dimension>(conn)
            .optional()
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        dimension_id: uuid::Uuid,
        changes: &DimensionChanges,
    ) -> Result<Dimension, diesel::result::Error> {
        use crate::schema::dimensions::dsl::*;
        diesel::update(dimensions.filter(id.eq(dimension_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result::<Dimension>(conn)
    }
}
