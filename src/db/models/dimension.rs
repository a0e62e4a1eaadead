use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::dimensions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Dimension {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub color_code: String,
    pub icon_name: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::dimensions)]
pub struct NewDimension {
    pub user_id: Uuid,
    pub name: String,
    pub color_code: String,
    pub icon_name: String,
    pub display_order: i32,
    pub is_active: bool,
}

// Display attributes only; identity and ownership never change.
#[derive(AsChangeset, Default, Clone, Debug)]
#[diesel(table_name = crate::schema::dimensions)]
pub struct DimensionChanges {
    pub name: Option<String>,
    pub color_code: Option<String>,
    pub icon_name: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl DimensionChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.color_code.is_none()
            && self.icon_name.is_none()
            && self.display_order.is_none()
            && self.is_active.is_none()
    }
}
