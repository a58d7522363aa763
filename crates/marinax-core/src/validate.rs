// ── Client-side field validation ──
//
// Checks that run before any network call. Failures are surfaced inline
// next to the offending field by the caller; they are never sent to the
// notification channel and never leave the form/command layer.

use thiserror::Error;

/// A validation failure attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject empty or whitespace-only input.
pub fn require(field: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    Ok(())
}

/// Shape check only -- the server does the authoritative validation.
pub fn email(field: &str, value: &str) -> Result<(), FieldError> {
    require(field, value)?;

    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::new(field, "is not a valid email address"));
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || value.contains(' ') {
        return Err(FieldError::new(field, "is not a valid email address"));
    }

    Ok(())
}

/// Minimum strength: at least 8 characters with a letter and a digit.
pub fn password(field: &str, value: &str) -> Result<(), FieldError> {
    if value.chars().count() < 8 {
        return Err(FieldError::new(field, "must be at least 8 characters"));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) || !value.chars().any(|c| c.is_ascii_digit())
    {
        return Err(FieldError::new(
            field,
            "must contain at least one letter and one digit",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_input() {
        assert!(require("name", "").is_err());
        assert!(require("name", "   ").is_err());
        assert!(require("name", "Harbor Divers").is_ok());
    }

    #[test]
    fn email_shape_checks() {
        assert!(email("email", "ops@marine-axis.io").is_ok());
        assert!(email("email", "no-at-sign").is_err());
        assert!(email("email", "@marine-axis.io").is_err());
        assert!(email("email", "ops@").is_err());
        assert!(email("email", "ops@localhost").is_err());
        assert!(email("email", "ops with space@marine-axis.io").is_err());
    }

    #[test]
    fn password_strength_checks() {
        assert!(password("password", "short1").is_err());
        assert!(password("password", "lettersonly").is_err());
        assert!(password("password", "12345678").is_err());
        assert!(password("password", "anchor2024").is_ok());
    }

    #[test]
    fn field_error_reads_inline() {
        let err = email("email", "bad").unwrap_err();
        assert_eq!(err.to_string(), "email: is not a valid email address");
    }
}
