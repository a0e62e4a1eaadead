use chrono::NaiveDate;

use crate::error::AppError;

pub fn validate_horizon(
    start_date: NaiveDate,
    end_date: NaiveDate,
    cycle_length_days: u32,
    total_cycle_count: Option<u32>,
) -> Result<(), AppError> {
    if start_date > end_date {
        return Err(AppError::invalid_range("Horizon start must not be after its end"));
    }
    if cycle_length_days == 0 {
        return Err(AppError::invalid_range("Cycle length must be at least one day"));
    }
    if total_cycle_count == Some(0) {
        return Err(AppError::invalid_range("At least one cycle is required"));
    }
    Ok(())
}
