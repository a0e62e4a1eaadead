use chrono::NaiveDate;

use crate::db::enums::RecordStatus;
use crate::db::models::{Cycle, Dimension};
use crate::error::AppError;

pub fn validate_save_record(
    cycle: &Cycle,
    dimension: &Dimension,
    record_date: NaiveDate,
    content: &str,
    status: RecordStatus,
) -> Result<(), AppError> {
    if !cycle.contains(record_date) {
        return Err(AppError::validation(format!(
            "Record date {} is outside cycle {} ({} to {})",
            record_date, cycle.cycle_number, cycle.start_date, cycle.end_date
        )));
    }
    if dimension.user_id != cycle.user_id {
        return Err(AppError::not_found("dimension"));
    }
    if !dimension.is_active {
        return Err(AppError::validation("Dimension is not active"));
    }
    if status.is_published() && content.trim().is_empty() {
        return Err(AppError::validation("Published records need content"));
    }
    Ok(())
}

/// Characters of content, the unit the journal counts.
pub fn word_count(content: &str) -> i32 {
    i32::try_from(content.chars().count()).unwrap_or(i32::MAX)
}
