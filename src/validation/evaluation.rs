use crate::domain::scoring::validate_score;
use crate::error::AppError;

pub fn validate_evaluation(
    ai_score: f64,
    ai_analysis: &str,
    user_score: Option<f64>,
) -> Result<(), AppError> {
    validate_score("ai_score", ai_score)?;
    if let Some(user) = user_score {
        validate_score("user_score", user)?;
    }
    if ai_analysis.trim().is_empty() {
        return Err(AppError::validation("AI analysis is required"));
    }
    Ok(())
}
