use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CalendarConfig;
use crate::db::enums::CycleStatus;
use crate::db::models::cycle::{Cycle, NewCycle};
use crate::domain::calendar;
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::store::{CycleStore, DimensionStore, RecordStore, Store};
use crate::validation::cycle::validate_horizon;

#[derive(Deserialize, Debug, Clone)]
pub struct EstablishHorizonRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cycle_length_days: Option<u32>,
    pub total_cycle_count: Option<u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CycleStats {
    pub id: Uuid,
    pub cycle_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CycleStatus,
    pub total_days: i32,
    pub elapsed_days: i64,
    pub days_remaining: i64,
    pub dimension_count: usize,
    pub expected_slots: i64,
    pub published_slots: usize,
    pub completion_rate: i32,
}

pub struct CyclesService;

impl CyclesService {
    /// Generates and stores every cycle of the user's horizon.
    pub fn establish_horizon<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        calendar_config: &CalendarConfig,
        req: &EstablishHorizonRequest,
        today: NaiveDate,
    ) -> AppResult<Vec<Cycle>> {
        let cycle_length = req
            .cycle_length_days
            .unwrap_or(calendar_config.cycle_length_days);
        validate_horizon(req.start_date, req.end_date, cycle_length, req.total_cycle_count)?;

        if store.has_cycles(ctx.user_id)? {
            return Err(AppError::conflict_with_code(
                "Cycles already exist for this user",
                None,
                "HORIZON_EXISTS",
            ));
        }

        let count = match req.total_cycle_count {
            Some(count) => count,
            None => calendar::cycles_needed(req.start_date, req.end_date, cycle_length)?,
        };
        let planned =
            calendar::generate_cycles(req.start_date, req.end_date, cycle_length, count, today)?;

        let new_cycles: Vec<NewCycle> = planned
            .into_iter()
            .map(|p| NewCycle {
                user_id: ctx.user_id,
                cycle_number: p.cycle_number,
                start_date: p.start_date,
                end_date: p.end_date,
                total_days: p.total_days,
                completion_rate: p.completion_rate,
                status: p.status,
            })
            .collect();
        let mut cycles = store.insert_cycles(&new_cycles)?;

        tracing::info!(
            user_id = %ctx.user_id,
            cycles = cycles.len(),
            start = %req.start_date,
            end = %req.end_date,
            "Cycle horizon established"
        );

        if calendar_config.recompute_completed_on_generate {
            for cycle in cycles.iter_mut() {
                if cycle.status == CycleStatus::Completed {
                    *cycle = Self::recompute(store, cycle, today)?;
                }
            }
        }

        Ok(cycles)
    }

    pub fn list<S: CycleStore + ?Sized>(store: &S, ctx: &RequestContext) -> AppResult<Vec<Cycle>> {
        store.list_cycles(ctx.user_id)
    }

    pub fn get_by_id<S: CycleStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
    ) -> AppResult<Cycle> {
        store
            .find_cycle(cycle_id)?
            .filter(|c| c.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("cycle"))
    }

    pub fn current<S: CycleStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        today: NaiveDate,
    ) -> AppResult<Option<Cycle>> {
        let cycles = store.list_cycles(ctx.user_id)?;
        Ok(calendar::current_cycle(&cycles, today).cloned())
    }

    pub fn recompute_completion<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Cycle> {
        let cycle = Self::get_by_id(store, ctx, cycle_id)?;
        Self::recompute(store, &cycle, today)
    }

    /// Recomputes against the cycle's status on `today`, which may be ahead of
    /// the stored one, and stores both. Cycles not yet started keep their 0.
    pub(crate) fn recompute<S>(store: &S, cycle: &Cycle, today: NaiveDate) -> AppResult<Cycle>
    where
        S: CycleStore + DimensionStore + RecordStore + ?Sized,
    {
        let status = calendar::status_on(cycle.start_date, cycle.end_date, today);
        if status == CycleStatus::NotStarted {
            return Ok(cycle.clone());
        }
        let rate = Self::measured_rate(store, cycle)?.2;
        let updated = store.update_cycle_progress(cycle.id, rate, status)?;
        tracing::debug!(
            cycle_id = %cycle.id,
            previous = cycle.completion_rate,
            completion_rate = rate,
            status = %status,
            "Completion rate recomputed"
        );
        Ok(updated)
    }

    /// (active dimensions, published slots, rate) for the cycle's date range.
    fn measured_rate<S>(store: &S, cycle: &Cycle) -> AppResult<(usize, usize, i32)>
    where
        S: DimensionStore + RecordStore + ?Sized,
    {
        let dimension_count = store.list_active_dimensions(cycle.user_id)?.len();
        let slots = store.published_slots(cycle.user_id, cycle.start_date, cycle.end_date)?;
        let published = calendar::count_published_slots(slots, cycle.start_date, cycle.end_date);
        let rate = calendar::completion_rate(cycle.total_days, dimension_count, published);
        Ok((dimension_count, published, rate))
    }

    /// Moves stored statuses forward to match `today`, for one user or for
    /// every user with open cycles. Returns the cycles that changed.
    pub fn refresh_statuses<S: Store + ?Sized>(
        store: &S,
        user_id: Option<Uuid>,
        today: NaiveDate,
    ) -> AppResult<Vec<Cycle>> {
        let cycles = match user_id {
            Some(uid) => store.list_cycles(uid)?,
            None => store.list_open_cycles()?,
        };

        let mut changed = Vec::new();
        for change in calendar::status_changes(&cycles, today) {
            let Some(cycle) = cycles.iter().find(|c| c.id == change.cycle_id) else {
                continue;
            };
            let rate = match change.to {
                CycleStatus::NotStarted => 0,
                CycleStatus::Active | CycleStatus::Completed => Self::measured_rate(store, cycle)?.2,
            };
            let updated = store.update_cycle_progress(cycle.id, rate, change.to)?;
            tracing::info!(
                user_id = %cycle.user_id,
                cycle_id = %cycle.id,
                cycle_number = cycle.cycle_number,
                from = %change.from,
                to = %change.to,
                completion_rate = rate,
                "Cycle status changed"
            );
            changed.push(updated);
        }
        Ok(changed)
    }

    pub fn get_stats<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<CycleStats> {
        let cycle = Self::get_by_id(store, ctx, cycle_id)?;
        let (dimension_count, published_slots, measured) = Self::measured_rate(store, &cycle)?;
        let elapsed = calendar::elapsed_days(cycle.start_date, cycle.end_date, today);
        let status = calendar::status_on(cycle.start_date, cycle.end_date, today);

        Ok(CycleStats {
            id: cycle.id,
            cycle_number: cycle.cycle_number,
            start_date: cycle.start_date,
            end_date: cycle.end_date,
            status,
            total_days: cycle.total_days,
            elapsed_days: elapsed,
            days_remaining: i64::from(cycle.total_days) - elapsed,
            dimension_count,
            expected_slots: i64::from(cycle.total_days) * dimension_count as i64,
            published_slots,
            completion_rate: if status == CycleStatus::NotStarted { 0 } else { measured },
        })
    }
}
