//! Cycle calendar: partitions a user's horizon into fixed-length cycles,
//! labels their lifecycle relative to an explicit `today`, and derives the
//! completion percentage of a cycle from its published record slots.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::db::enums::CycleStatus;
use crate::db::models::Cycle;
use crate::error::{AppError, AppResult};

pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 10;

/// A cycle as produced by generation, before it has an id or an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedCycle {
    pub cycle_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i32,
    pub status: CycleStatus,
    pub completion_rate: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub cycle_id: Uuid,
    pub from: CycleStatus,
    pub to: CycleStatus,
}

/// Inclusive day count of `[start, end]`.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// First and last day of a calendar year.
pub fn year_horizon(year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1);
    let end = NaiveDate::from_ymd_opt(year, 12, 31);
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::invalid_range(format!("year {} is out of range", year))),
    }
}

/// Number of cycles of `cycle_length_days` needed to cover `[start, end]`,
/// counting a trailing partial cycle.
pub fn cycles_needed(start: NaiveDate, end: NaiveDate, cycle_length_days: u32) -> AppResult<u32> {
    if start > end {
        return Err(AppError::invalid_range(format!(
            "start date {} is after horizon end {}",
            start, end
        )));
    }
    if cycle_length_days == 0 {
        return Err(AppError::invalid_range("cycle length must be positive"));
    }
    let days = span_days(start, end);
    let len = i64::from(cycle_length_days);
    u32::try_from((days + len - 1) / len)
        .map_err(|_| AppError::invalid_range("horizon is too long"))
}

/// Lifecycle of `[start, end]` on `today`, by date alone.
pub fn status_on(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> CycleStatus {
    if today > end {
        CycleStatus::Completed
    } else if today >= start {
        CycleStatus::Active
    } else {
        CycleStatus::NotStarted
    }
}

/// Rate assigned at generation time. Completed cycles get a placeholder 100
/// until a recompute replaces it.
pub fn initial_completion_rate(status: CycleStatus) -> i32 {
    match status {
        CycleStatus::Completed => 100,
        CycleStatus::Active | CycleStatus::NotStarted => 0,
    }
}

fn offset(date: NaiveDate, days: u64) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::invalid_range("date arithmetic overflowed"))
}

/// Splits `[start_date, horizon_end]` into `total_cycle_count` contiguous
/// cycles of `cycle_length_days`. The last cycle ends on `horizon_end`, so it
/// may be shorter or longer than the others.
pub fn generate_cycles(
    start_date: NaiveDate,
    horizon_end: NaiveDate,
    cycle_length_days: u32,
    total_cycle_count: u32,
    today: NaiveDate,
) -> AppResult<Vec<PlannedCycle>> {
    if start_date > horizon_end {
        return Err(AppError::invalid_range(format!(
            "start date {} is after horizon end {}",
            start_date, horizon_end
        )));
    }
    if cycle_length_days == 0 {
        return Err(AppError::invalid_range("cycle length must be positive"));
    }
    if total_cycle_count == 0 {
        return Err(AppError::invalid_range("at least one cycle is required"));
    }

    let len = u64::from(cycle_length_days);
    let last_start = offset(start_date, (u64::from(total_cycle_count) - 1) * len)?;
    if last_start > horizon_end {
        return Err(AppError::invalid_range(format!(
            "{} cycles of {} days do not fit before {}",
            total_cycle_count, cycle_length_days, horizon_end
        )));
    }

    let mut cycles = Vec::with_capacity(total_cycle_count as usize);
    for index in 0..total_cycle_count {
        let start = offset(start_date, u64::from(index) * len)?;
        let end = if index + 1 == total_cycle_count {
            horizon_end
        } else {
            offset(start, len - 1)?
        };
        let status = status_on(start, end, today);
        cycles.push(PlannedCycle {
            cycle_number: index as i32 + 1,
            start_date: start,
            end_date: end,
            total_days: span_days(start, end) as i32,
            status,
            completion_rate: initial_completion_rate(status),
        });
    }
    Ok(cycles)
}

/// `round(100 * published / (total_days * dimension_count))`, clamped to
/// `[0, 100]`. Zero expected slots yield 0.
pub fn completion_rate(total_days: i32, dimension_count: usize, published_slots: usize) -> i32 {
    let expected = i64::from(total_days.max(0)) * dimension_count as i64;
    if expected <= 0 {
        return 0;
    }
    let published = published_slots as i64;
    // integer half-up rounding
    let rate = (200 * published + expected) / (2 * expected);
    rate.clamp(0, 100) as i32
}

/// Distinct `(dimension, day)` pairs that fall inside `[start, end]`.
pub fn count_published_slots<I>(slots: I, start: NaiveDate, end: NaiveDate) -> usize
where
    I: IntoIterator<Item = (Uuid, NaiveDate)>,
{
    slots
        .into_iter()
        .filter(|(_, date)| start <= *date && *date <= end)
        .collect::<HashSet<_>>()
        .len()
}

/// The cycle whose range contains `today`, if any.
pub fn current_cycle(cycles: &[Cycle], today: NaiveDate) -> Option<&Cycle> {
    cycles
        .iter()
        .find(|c| status_on(c.start_date, c.end_date, today) == CycleStatus::Active)
}

/// Status transitions needed to bring stored cycles in line with `today`.
pub fn status_changes(cycles: &[Cycle], today: NaiveDate) -> Vec<StatusChange> {
    cycles
        .iter()
        .filter_map(|c| {
            let to = status_on(c.start_date, c.end_date, today);
            (to != c.status).then_some(StatusChange {
                cycle_id: c.id,
                from: c.status,
                to,
            })
        })
        .collect()
}

/// Days of the cycle that have already started, as of `today`.
pub fn elapsed_days(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> i64 {
    if today < start {
        0
    } else if today > end {
        span_days(start, end)
    } else {
        span_days(start, today)
    }
}
