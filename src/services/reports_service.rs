use uuid::Uuid;

use crate::domain::report::{
    GlobalStats, Scorecard, TrendPoint, completed_trend, cycle_scorecard, global_stats,
};
use crate::error::AppResult;
use crate::services::context::RequestContext;
use crate::services::cycles_service::CyclesService;
use crate::store::Store;

pub struct ReportsService;

impl ReportsService {
    /// Mean final score per active dimension for one cycle.
    pub fn cycle_scorecard<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
    ) -> AppResult<Scorecard> {
        let cycle = CyclesService::get_by_id(store, ctx, cycle_id)?;
        let dimensions = store.list_active_dimensions(ctx.user_id)?;
        let evaluations = store.list_evaluations(ctx.user_id, cycle.id)?;
        Ok(cycle_scorecard(cycle.id, &dimensions, &evaluations))
    }

    pub fn trend<S: Store + ?Sized>(store: &S, ctx: &RequestContext) -> AppResult<Vec<TrendPoint>> {
        let cycles = store.list_cycles(ctx.user_id)?;
        let dimensions = store.list_active_dimensions(ctx.user_id)?;
        let evaluations = store.list_all_evaluations(ctx.user_id)?;
        Ok(completed_trend(&cycles, &dimensions, &evaluations))
    }

    /// Lifetime totals across every cycle the user owns.
    pub fn global_stats<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
    ) -> AppResult<GlobalStats> {
        let cycles = store.list_cycles(ctx.user_id)?;
        let mut records = Vec::new();
        for cycle in &cycles {
            records.extend(store.list_records(ctx.user_id, cycle.id)?);
        }
        // Expenses always hang off a cycle, so the horizon bounds them.
        let bounds = cycles
            .iter()
            .map(|c| c.start_date)
            .min()
            .zip(cycles.iter().map(|c| c.end_date).max());
        let expenses = match bounds {
            Some((from, to)) => store.list_expenses(ctx.user_id, from, to)?,
            None => Vec::new(),
        };

        let stats = global_stats(&cycles, &records, &expenses);
        tracing::debug!(
            user_id = %ctx.user_id,
            completed = stats.total_cycles_completed,
            records = stats.total_records,
            "Global stats computed"
        );
        Ok(stats)
    }
}
