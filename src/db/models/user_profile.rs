use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub ai_service_provider: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct NewUserProfile {
    pub user_id: Uuid,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub ai_service_provider: Option<String>,
}

// `Some(None)` clears a nullable column; `None` leaves it alone.
#[derive(AsChangeset, Default, Clone, Debug)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct ProfileChanges {
    pub nickname: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub ai_service_provider: Option<Option<String>>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.avatar_url.is_none() && self.ai_service_provider.is_none()
    }
}
