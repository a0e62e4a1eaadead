use tenday_backend::config::CalendarConfig;
use tenday_backend::db::enums::CycleStatus;
use tenday_backend::domain::calendar::{completion_rate, generate_cycles};
use tenday_backend::error::AppError;
use tenday_backend::services::cycles_service::EstablishHorizonRequest;
use tenday_backend::services::{CyclesService, RequestContext};
use tenday_backend::store::MemoryStore;
use uuid::Uuid;

use super::{d, journal};

#[test]
fn year_horizon_ends_with_short_cycle() {
    let j = journal(d(2026, 3, 15));
    assert_eq!(j.cycles.len(), 37);
    let last = j.cycles.last().unwrap();
    assert_eq!(last.cycle_number, 37);
    assert_eq!(last.start_date, d(2026, 12, 27));
    assert_eq!(last.end_date, d(2026, 12, 31));
    assert_eq!(last.total_days, 5);
    assert!(j.cycles[..36].iter().all(|c| c.total_days == 10));
}

#[test]
fn generated_cycles_are_contiguous() {
    let cycles = generate_cycles(d(2028, 1, 1), d(2028, 12, 31), 10, 37, d(2028, 6, 1)).unwrap();
    for pair in cycles.windows(2) {
        assert_eq!(pair[0].end_date.succ_opt().unwrap(), pair[1].start_date);
    }
    // leap year: 366 - 360
    assert_eq!(cycles.last().unwrap().total_days, 6);
}

#[test]
fn exactly_one_active_cycle_inside_horizon() {
    for today in [d(2026, 1, 1), d(2026, 1, 10), d(2026, 1, 11), d(2026, 7, 4), d(2026, 12, 31)] {
        let cycles = generate_cycles(d(2026, 1, 1), d(2026, 12, 31), 10, 37, today).unwrap();
        let active = cycles.iter().filter(|c| c.status == CycleStatus::Active).count();
        assert_eq!(active, 1, "today = {}", today);
    }
}

#[test]
fn completed_cycles_start_at_100_until_recomputed() {
    let cycles = generate_cycles(d(2026, 1, 1), d(2026, 12, 31), 10, 37, d(2026, 2, 1)).unwrap();
    assert_eq!(cycles[0].status, CycleStatus::Completed);
    assert_eq!(cycles[0].completion_rate, 100);
    assert_eq!(cycles[3].status, CycleStatus::Active);
    assert_eq!(cycles[3].completion_rate, 0);
    assert_eq!(cycles[4].status, CycleStatus::NotStarted);
}

#[test]
fn establish_recomputes_completed_cycles_by_default() {
    // nothing has been written yet, so measured rates are 0
    let j = journal(d(2026, 2, 1));
    assert_eq!(j.cycles[0].status, CycleStatus::Completed);
    assert_eq!(j.cycles[0].completion_rate, 0);
}

#[test]
fn establish_keeps_placeholder_when_recompute_disabled() {
    let store = MemoryStore::new();
    let ctx = RequestContext::for_user(Uuid::new_v4());
    let config = CalendarConfig {
        cycle_length_days: 10,
        recompute_completed_on_generate: false,
    };
    let req = EstablishHorizonRequest {
        start_date: d(2026, 1, 1),
        end_date: d(2026, 1, 30),
        cycle_length_days: None,
        total_cycle_count: None,
    };
    let cycles = CyclesService::establish_horizon(&store, &ctx, &config, &req, d(2026, 1, 25)).unwrap();
    assert_eq!(cycles.len(), 3);
    assert_eq!(cycles[0].completion_rate, 100);
    assert_eq!(cycles[2].status, CycleStatus::Active);

    let again = CyclesService::establish_horizon(&store, &ctx, &config, &req, d(2026, 1, 25));
    assert!(matches!(again, Err(AppError::Conflict { .. })));
}

#[test]
fn invalid_ranges_are_rejected() {
    assert!(matches!(
        generate_cycles(d(2026, 2, 1), d(2026, 1, 1), 10, 1, d(2026, 1, 1)),
        Err(AppError::InvalidRange { .. })
    ));
    assert!(matches!(
        generate_cycles(d(2026, 1, 1), d(2026, 1, 31), 0, 3, d(2026, 1, 1)),
        Err(AppError::InvalidRange { .. })
    ));
    // 5 cycles of 10 days cannot start before Jan 31
    assert!(matches!(
        generate_cycles(d(2026, 1, 1), d(2026, 1, 31), 10, 5, d(2026, 1, 1)),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn completion_rate_rounds_and_stays_bounded() {
    assert_eq!(completion_rate(10, 5, 30), 60);
    assert_eq!(completion_rate(10, 3, 1), 3);
    assert_eq!(completion_rate(10, 3, 2), 7);
    assert_eq!(completion_rate(10, 0, 7), 0);
    assert_eq!(completion_rate(10, 1, 50), 100);
}

#[test]
fn current_cycle_and_status_refresh() {
    let j = journal(d(2026, 1, 5));
    let current = CyclesService::current(&j.store, &j.ctx, d(2026, 1, 15)).unwrap().unwrap();
    assert_eq!(current.cycle_number, 2);
    assert!(CyclesService::current(&j.store, &j.ctx, d(2027, 1, 1)).unwrap().is_none());

    let changed = CyclesService::refresh_statuses(&j.store, Some(j.ctx.user_id), d(2026, 1, 15)).unwrap();
    assert_eq!(changed.len(), 2);
    assert_eq!(changed[0].status, CycleStatus::Completed);
    assert_eq!(changed[1].status, CycleStatus::Active);

    // running again on the same day changes nothing
    let unchanged = CyclesService::refresh_statuses(&j.store, None, d(2026, 1, 15)).unwrap();
    assert!(unchanged.is_empty());
}

#[test]
fn stats_describe_progress_through_the_cycle() {
    let j = journal(d(2026, 1, 4));
    let stats = CyclesService::get_stats(&j.store, &j.ctx, j.cycles[0].id, d(2026, 1, 4)).unwrap();
    assert_eq!(stats.status, CycleStatus::Active);
    assert_eq!(stats.elapsed_days, 4);
    assert_eq!(stats.days_remaining, 6);
    assert_eq!(stats.dimension_count, 6);
    assert_eq!(stats.expected_slots, 60);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn other_users_cycles_are_not_found() {
    let j = journal(d(2026, 1, 4));
    let stranger = RequestContext::for_user(Uuid::new_v4());
    assert!(matches!(
        CyclesService::get_by_id(&j.store, &stranger, j.cycles[0].id),
        Err(AppError::NotFound { .. })
    ));
}
