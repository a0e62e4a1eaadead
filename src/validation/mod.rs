pub mod cycle;
pub mod dimension;
pub mod evaluation;
pub mod expense;
pub mod goal;
pub mod profile;
pub mod record;

/// Field rules shared by the `Validate` derives.
pub mod rules {
    use validator::ValidationError;

    /// `#RRGGBB`
    pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
        if !is_hex_color(color) {
            return Err(ValidationError::new("invalid_hex_color"));
        }
        Ok(())
    }

    pub fn is_hex_color(color: &str) -> bool {
        color.starts_with('#')
            && color.len() == 7
            && color.chars().skip(1).all(|c| c.is_ascii_hexdigit())
    }

    pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("blank"));
        }
        Ok(())
    }
}
