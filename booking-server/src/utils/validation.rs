//! Input validation helpers
//!
//! Centralized text length constants and field validators shared by the CRUD
//! handlers and the booking request validator. SQLite TEXT has no built-in
//! length enforcement, so limits are applied here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: table, customer, platform, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, location tag, coords, slug
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

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

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a phone number: optional leading `+`, then 7 to 15 digits.
pub fn validate_phone(value: &str) -> Result<(), AppError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.len() < 7 || digits.len() > 15 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(
            "phone must match +<7..15 digits>, e.g. +375291232233",
        ));
    }
    Ok(())
}

/// Minimal email sanity check: `local@domain`, within length limit.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    if value.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation("email is too long"));
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is not valid"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_plus_and_digits() {
        assert!(validate_phone("+375291232233").is_ok());
        assert!(validate_phone("74951234567").is_ok());
    }

    #[test]
    fn phone_rejects_short_long_and_letters() {
        assert!(validate_phone("+12345").is_err());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("+7495abc4567").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("guest@nodot").is_err());
    }
}
