use crate::db::models::DimensionChanges;
use crate::error::AppError;
use crate::validation::rules::is_hex_color;

pub const MAX_NAME_LEN: usize = 50;

fn check_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Dimension name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation("Dimension name must be at most 50 characters"));
    }
    Ok(())
}

pub fn validate_create_dimension(name: &str, color: &str, icon: &str) -> Result<(), AppError> {
    check_name(name)?;
    if !is_hex_color(color) {
        return Err(AppError::validation("Color must be hex like #RRGGBB"));
    }
    if icon.trim().is_empty() {
        return Err(AppError::validation("Icon name is required"));
    }
    Ok(())
}

pub fn validate_update_dimension(changes: &DimensionChanges) -> Result<(), AppError> {
    if changes.is_empty() {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(name) = changes.name.as_deref() {
        check_name(name)?;
    }
    if let Some(color) = changes.color_code.as_deref() {
        if !is_hex_color(color) {
            return Err(AppError::validation("Color must be hex like #RRGGBB"));
        }
    }
    if let Some(icon) = changes.icon_name.as_deref() {
        if icon.trim().is_empty() {
            return Err(AppError::validation("Icon name cannot be empty"));
        }
    }
    Ok(())
}
