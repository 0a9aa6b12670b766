//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Field names
//! in error messages use the wire-level (camelCase) spelling so the booking
//! form can surface them directly.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Upper bound on party size; larger values are almost certainly typos
pub const MAX_PARTY_SIZE: u32 = 100;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Ada", "customerName", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "customerName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "customerName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(500), "customerName", MAX_NAME_LEN).is_err());
    }
}
