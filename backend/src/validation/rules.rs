//! Common validation rules shared across request payloads.

use validator::ValidationError;

const MAX_EMPLOYEE_CODE_LEN: usize = 64;

/// Validates a user-assigned employee code. Any text is allowed as long as
/// it is not blank and stays within 64 characters after trimming.
pub fn validate_employee_code(code: &str) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ValidationError::new("employee_code_blank")
            .with_message("Employee ID is required".into()));
    }
    if code.chars().count() > MAX_EMPLOYEE_CODE_LEN {
        return Err(ValidationError::new("employee_code_too_long")
            .with_message("Employee ID must be at most 64 characters".into()));
    }
    Ok(())
}

/// Rejects values made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Must not be blank".into()));
    }
    Ok(())
}
