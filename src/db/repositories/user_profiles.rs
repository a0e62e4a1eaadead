use chrono::Utc;
use diesel::prelude::*;

use crate::db::models::user_profile::{NewUserProfile, ProfileChanges, UserProfile};

pub struct UserProfilesRepo;

impl UserProfilesRepo {
    pub fn find_by_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
    ) -> Result<Option<UserProfile>, diesel::result::Error> {
        use crate::schema::user_profiles::dsl::*;
        user_profiles
            .filter(user_id.eq(uid))
            .first::<UserProfile>(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_profile: &NewUserProfile,
    ) -> Result<UserProfile, diesel::result::Error> {
        diesel::insert_into(crate::schema::user_profiles::table)
            .values(new_profile)
            .get_result(conn)
    }

    pub fn update_by_user(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        changes: &ProfileChanges,
    ) -> Result<UserProfile, diesel::result::Error> {
        use crate::schema::user_profiles::dsl::*;
        diesel::update(user_profiles.filter(user_id.eq(uid)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result::<UserProfile>(conn)
    }
}
