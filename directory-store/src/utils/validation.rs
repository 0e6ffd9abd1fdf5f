//! Input validation helpers
//!
//! The store itself accepts whatever it is handed; these checks belong at
//! the form boundary, where the dashboard validates before submitting.
//! Limits are UX limits, not storage limits.

use shared::constants::is_known_state;
use shared::models::EmployeeCreate;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Employee full names
pub const MAX_NAME_LEN: usize = 200;

/// Profile image URLs / data URIs
pub const MAX_IMAGE_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a create payload the way the employee form does.
///
/// Gender and date of birth are already typed, so only the free-form
/// fields need checking: a non-empty name and a state from the fixed list.
pub fn validate_employee_create(payload: &EmployeeCreate) -> Result<(), AppError> {
    validate_required_text(&payload.full_name, "fullName", MAX_NAME_LEN)?;

    if !is_known_state(&payload.state) {
        return Err(AppError::validation(format!(
            "Unknown state: {}",
            payload.state
        )));
    }

    if payload.profile_image.len() > MAX_IMAGE_LEN {
        return Err(AppError::validation(format!(
            "profileImage is too long ({} chars, max {MAX_IMAGE_LEN})",
            payload.profile_image.len()
        )));
    }

    Ok(())
}
