use tenday_backend::config::CalendarConfig;
use tenday_backend::db::enums::RecordStatus;
use tenday_backend::db::models::Record;
use tenday_backend::error::AppError;
use tenday_backend::services::cycles_service::EstablishHorizonRequest;
use tenday_backend::services::expenses_service::{ExpenseItem, SaveExpensesRequest};
use tenday_backend::services::records_service::SaveRecordRequest;
use tenday_backend::services::{CyclesService, ExpensesService, RecordsService, RequestContext};
use uuid::Uuid;

use super::{Journal, d, journal};

fn item(category: &str, amount: f64, day: u32) -> ExpenseItem {
    ExpenseItem {
        category: category.to_string(),
        item_name: format!("{} purchase", category),
        amount,
        expense_date: d(2026, 1, day),
    }
}

fn write(j: &Journal, cycle: usize, day: u32) -> Record {
    RecordsService::save(
        &j.store,
        &j.ctx,
        &SaveRecordRequest {
            cycle_id: j.cycles[cycle].id,
            dimension_id: j.dimensions[4].id,
            record_date: d(2026, 1, day),
            content: "groceries".to_string(),
            status: RecordStatus::Published,
        },
        j.today,
    )
    .unwrap()
}

fn linking(j: &Journal, record_id: Uuid) -> SaveExpensesRequest {
    SaveExpensesRequest {
        cycle_id: j.cycles[0].id,
        record_id: Some(record_id),
        items: vec![item("food", 9.0, 2)],
    }
}

#[test]
fn batch_is_saved_and_summarized() {
    let j = journal(d(2026, 1, 5));
    let saved = ExpensesService::save_batch(
        &j.store,
        &j.ctx,
        &SaveExpensesRequest {
            cycle_id: j.cycles[0].id,
            record_id: None,
            items: vec![item("food", 12.5, 2), item("food", 7.5, 3), item("books", 30.0, 9)],
        },
    )
    .unwrap();
    assert_eq!(saved.len(), 3);

    let summary = ExpensesService::summary(&j.store, &j.ctx, d(2026, 1, 1), d(2026, 1, 5)).unwrap();
    assert_eq!(summary.total, 20.0);
    assert_eq!(summary.by_category.len(), 1);

    let all = ExpensesService::list_range(&j.store, &j.ctx, d(2026, 1, 1), d(2026, 1, 10)).unwrap();
    assert_eq!(all.len(), 3);

    ExpensesService::delete(&j.store, &j.ctx, all[0].id).unwrap();
    assert!(matches!(
        ExpensesService::delete(&j.store, &j.ctx, all[0].id),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn one_bad_item_rejects_the_batch() {
    let j = journal(d(2026, 1, 5));
    let result = ExpensesService::save_batch(
        &j.store,
        &j.ctx,
        &SaveExpensesRequest {
            cycle_id: j.cycles[0].id,
            record_id: None,
            items: vec![item("food", 12.5, 2), item("rent", -1.0, 3)],
        },
    );
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert!(ExpensesService::list_range(&j.store, &j.ctx, d(2026, 1, 1), d(2026, 1, 10)).unwrap().is_empty());

    assert!(matches!(
        ExpensesService::list_range(&j.store, &j.ctx, d(2026, 1, 10), d(2026, 1, 1)),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn linked_record_must_be_the_callers_and_in_the_cycle() {
    let alice = journal(d(2026, 1, 5));
    let own = write(&alice, 0, 2);
    let linked = ExpensesService::save_batch(&alice.store, &alice.ctx, &linking(&alice, own.id)).unwrap();
    assert_eq!(linked[0].record_id, Some(own.id));

    let later = write(&alice, 1, 12);
    assert!(matches!(
        ExpensesService::save_batch(&alice.store, &alice.ctx, &linking(&alice, later.id)),
        Err(AppError::Validation { .. })
    ));

    assert!(matches!(
        ExpensesService::save_batch(&alice.store, &alice.ctx, &linking(&alice, Uuid::new_v4())),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn another_users_record_cannot_be_linked() {
    let alice = journal(d(2026, 1, 5));
    let alices_record = write(&alice, 0, 2);

    // bob keeps his own journal in the same store
    let bob = RequestContext::for_user(Uuid::new_v4());
    let bobs_cycles = CyclesService::establish_horizon(
        &alice.store,
        &bob,
        &CalendarConfig::default(),
        &EstablishHorizonRequest {
            start_date: d(2026, 1, 1),
            end_date: d(2026, 12, 31),
            cycle_length_days: None,
            total_cycle_count: None,
        },
        alice.today,
    )
    .unwrap();

    let result = ExpensesService::save_batch(
        &alice.store,
        &bob,
        &SaveExpensesRequest {
            cycle_id: bobs_cycles[0].id,
            record_id: Some(alices_record.id),
            items: vec![item("food", 9.0, 2)],
        },
    );
    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert!(ExpensesService::list_range(&alice.store, &bob, d(2026, 1, 1), d(2026, 1, 10)).unwrap().is_empty());
}
