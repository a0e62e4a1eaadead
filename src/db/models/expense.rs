use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub record_id: Option<Uuid>,
    pub category: String,
    pub item_name: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpense {
    pub user_id: Uuid,
    pub cycle_id: Uuid,
    pub record_id: Option<Uuid>,
    pub category: String,
    pub item_name: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}
