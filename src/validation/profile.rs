use crate::db::models::ProfileChanges;
use crate::error::AppError;

pub const MAX_NICKNAME_LEN: usize = 50;

/// Providers the evaluation flow knows how to call.
pub const AI_SERVICE_PROVIDERS: [&str; 1] = ["deepseek"];

fn check_nickname(nickname: &str) -> Result<(), AppError> {
    let trimmed = nickname.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Nickname is required"));
    }
    if trimmed.chars().count() > MAX_NICKNAME_LEN {
        return Err(AppError::validation("Nickname must be at most 50 characters"));
    }
    Ok(())
}

fn check_provider(provider: &str) -> Result<(), AppError> {
    if !AI_SERVICE_PROVIDERS.contains(&provider) {
        return Err(AppError::validation(format!(
            "Unknown AI service provider: {provider}"
        )));
    }
    Ok(())
}

pub fn validate_create_profile(nickname: &str, provider: Option<&str>) -> Result<(), AppError> {
    check_nickname(nickname)?;
    if let Some(provider) = provider {
        check_provider(provider)?;
    }
    Ok(())
}

pub fn validate_update_profile(changes: &ProfileChanges) -> Result<(), AppError> {
    if changes.is_empty() {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(nickname) = changes.nickname.as_deref() {
        check_nickname(nickname)?;
    }
    if let Some(Some(provider)) = changes.ai_service_provider.as_ref() {
        check_provider(provider)?;
    }
    Ok(())
}
