use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::models::expense::{Expense, NewExpense};

pub struct ExpensesRepo;

impl ExpensesRepo {
    pub fn insert_batch(
        conn: &mut PgConnection,
        new_expenses: &[NewExpense],
    ) -> Result<Vec<Expense>, diesel::result::Error> {
        diesel::insert_into(crate::schema::expenses::table)
            .values(new_expenses)
            .get_results(conn)
    }

    pub fn list_by_date_range(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>, diesel::result::Error> {
        use crate::schema::expenses::dsl::*;
        expenses
            .filter(user_id.eq(uid))
            .filter(expense_date.between(from, to))
            .order(expense_date.asc())
            .load::<Expense>(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        uid: uuid::Uuid,
        expense_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::expenses::dsl::*;
        diesel::delete(expenses.filter(id.eq(expense_id)).filter(user_id.eq(uid))).execute(conn)
    }
}
