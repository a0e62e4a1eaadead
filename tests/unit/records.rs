use chrono::NaiveDate;
use tenday_backend::db::enums::{CycleStatus, RecordStatus};
use tenday_backend::error::AppError;
use tenday_backend::services::records_service::SaveRecordRequest;
use tenday_backend::services::{CyclesService, DimensionsService, RecordsService};

use super::{d, journal};

fn save(j: &super::Journal, cycle: usize, dim: usize, day: u32, content: &str, status: RecordStatus) -> Result<(), AppError> {
    save_on(j, j.today, cycle, dim, day, content, status)
}

fn save_on(
    j: &super::Journal,
    today: NaiveDate,
    cycle: usize,
    dim: usize,
    day: u32,
    content: &str,
    status: RecordStatus,
) -> Result<(), AppError> {
    RecordsService::save(
        &j.store,
        &j.ctx,
        &SaveRecordRequest {
            cycle_id: j.cycles[cycle].id,
            dimension_id: j.dimensions[dim].id,
            record_date: d(2026, 1, day),
            content: content.to_string(),
            status,
        },
        today,
    )
    .map(|_| ())
}

fn rate(j: &super::Journal, cycle: usize) -> i32 {
    CyclesService::get_by_id(&j.store, &j.ctx, j.cycles[cycle].id)
        .unwrap()
        .completion_rate
}

#[test]
fn thirty_of_fifty_slots_is_sixty_percent() {
    let j = journal(d(2026, 1, 8));
    DimensionsService::deactivate(&j.store, &j.ctx, j.dimensions[5].id).unwrap();

    for dim in 0..5 {
        for day in 1..=6 {
            save(&j, 0, dim, day, "done", RecordStatus::Published).unwrap();
        }
    }
    assert_eq!(rate(&j, 0), 60);
}

#[test]
fn drafts_do_not_count_until_published() {
    let j = journal(d(2026, 1, 8));
    save(&j, 0, 0, 2, "", RecordStatus::Draft).unwrap();
    assert_eq!(rate(&j, 0), 0);

    // 1 of 60 slots
    save(&j, 0, 0, 2, "went running", RecordStatus::Published).unwrap();
    assert_eq!(rate(&j, 0), 2);

    save(&j, 0, 0, 2, "went running", RecordStatus::Draft).unwrap();
    assert_eq!(rate(&j, 0), 0);
}

#[test]
fn saving_twice_updates_the_same_record() {
    let j = journal(d(2026, 1, 8));
    save(&j, 0, 1, 3, "first", RecordStatus::Published).unwrap();
    save(&j, 0, 1, 3, "second draft", RecordStatus::Published).unwrap();

    let records = RecordsService::list_for_cycle(&j.store, &j.ctx, j.cycles[0].id).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, "second draft");
    assert_eq!(records[0].word_count, 12);

    let found = RecordsService::get(&j.store, &j.ctx, j.cycles[0].id, j.dimensions[1].id, d(2026, 1, 3))
        .unwrap()
        .unwrap();
    assert_eq!(found.id, records[0].id);
}

#[test]
fn future_cycles_keep_zero() {
    let j = journal(d(2026, 1, 8));
    // cycle 2 has not started on Jan 8
    save(&j, 1, 0, 12, "planned ahead", RecordStatus::Published).unwrap();
    assert_eq!(rate(&j, 1), 0);
}

#[test]
fn cycle_started_before_status_refresh_is_recomputed() {
    let j = journal(d(2026, 1, 8));
    assert_eq!(j.cycles[1].status, CycleStatus::NotStarted);

    // Jan 11 is day one of cycle 2; no status refresh has run yet
    save_on(&j, d(2026, 1, 11), 1, 0, 11, "first day", RecordStatus::Published).unwrap();

    let cycle = CyclesService::get_by_id(&j.store, &j.ctx, j.cycles[1].id).unwrap();
    assert_eq!(cycle.status, CycleStatus::Active);
    // 1 of 60 slots
    assert_eq!(cycle.completion_rate, 2);
}

#[test]
fn invalid_records_are_rejected() {
    let j = journal(d(2026, 1, 8));
    assert!(matches!(
        save(&j, 0, 0, 11, "wrong cycle", RecordStatus::Published),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        save(&j, 0, 0, 4, "   ", RecordStatus::Published),
        Err(AppError::Validation { .. })
    ));

    DimensionsService::deactivate(&j.store, &j.ctx, j.dimensions[2].id).unwrap();
    assert!(save(&j, 0, 2, 4, "anything", RecordStatus::Published).is_err());
}
