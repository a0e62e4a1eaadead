use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::RecordStatus;
use crate::db::models::record::{NewRecord, Record, RecordKey};
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::services::cycles_service::CyclesService;
use crate::store::{RecordStore, Store};
use crate::validation::record::{validate_save_record, word_count};

fn default_status() -> RecordStatus {
    RecordStatus::Published
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct SaveRecordRequest {
    pub cycle_id: Uuid,
    pub dimension_id: Uuid,
    pub record_date: NaiveDate,
    #[validate(length(max = 20000, message = "Content must be at most 20000 characters"))]
    pub content: String,
    #[serde(default = "default_status")]
    pub status: RecordStatus,
}

pub struct RecordsService;

impl RecordsService {
    /// Upserts the record for `(user, cycle, dimension, day)`. When the
    /// record enters or leaves the published state the cycle's completion
    /// rate is recomputed; a failed recompute is logged and left stale.
    pub fn save<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &SaveRecordRequest,
        today: NaiveDate,
    ) -> AppResult<Record> {
        req.validate()?;

        let cycle = CyclesService::get_by_id(store, ctx, req.cycle_id)?;
        let dimension = store
            .find_dimension(req.dimension_id)?
            .filter(|d| d.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("dimension"))?;
        validate_save_record(&cycle, &dimension, req.record_date, &req.content, req.status)?;

        let new_record = NewRecord {
            user_id: ctx.user_id,
            cycle_id: cycle.id,
            dimension_id: dimension.id,
            record_date: req.record_date,
            content: req.content.clone(),
            word_count: word_count(&req.content),
            status: req.status,
        };

        let was_published = store
            .find_record(&new_record.key())?
            .is_some_and(|r| r.status.is_published());
        let record = store.upsert_record(&new_record)?;

        tracing::info!(
            user_id = %ctx.user_id,
            cycle_id = %cycle.id,
            dimension_id = %dimension.id,
            record_date = %record.record_date,
            status = record.status.as_str(),
            word_count = record.word_count,
            "Record saved"
        );

        if was_published != record.status.is_published() {
            if let Err(e) = CyclesService::recompute(store, &cycle, today) {
                tracing::warn!(
                    cycle_id = %cycle.id,
                    error = %e,
                    "Completion rate recompute failed; previous value kept"
                );
            }
        }

        Ok(record)
    }

    pub fn get<S: RecordStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
        dimension_id: Uuid,
        record_date: NaiveDate,
    ) -> AppResult<Option<Record>> {
        store.find_record(&RecordKey {
            user_id: ctx.user_id,
            cycle_id,
            dimension_id,
            record_date,
        })
    }

    pub fn list_for_cycle<S: Store + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        cycle_id: Uuid,
    ) -> AppResult<Vec<Record>> {
        let cycle = CyclesService::get_by_id(store, ctx, cycle_id)?;
        store.list_records(ctx.user_id, cycle.id)
    }
}
