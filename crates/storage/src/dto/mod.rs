pub mod category;
pub mod competitor;

use validator::ValidationError;

// Required text fields reject whitespace-only input, not just the empty string.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        Err(error)
    } else {
        Ok(())
    }
}
