//! Booking request validation
//!
//! Pure checks, run before anything touches the database. A rejected request
//! never leaves partial state behind.

use chrono::{DateTime, Duration, Utc};
use shared::models::BookingCreate;

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_phone, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Validate a booking request against `now`.
///
/// Rules:
/// - `datetime_from` strictly in the future
/// - `datetime_to` strictly after `datetime_from`
/// - `guests_count` at least 1
/// - window no longer than `max_hours`
/// - phone matches the `+?digits{7,15}` pattern, optional email is sane
pub fn validate(req: &BookingCreate, now: DateTime<Utc>, max_hours: i64) -> AppResult<()> {
    validate_required_text(&req.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_phone(&req.phone)?;
    if let Some(email) = &req.email {
        validate_email(email)?;
    }
    validate_optional_text(&req.table_preference, "table_preference", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.note, "note", MAX_NOTE_LEN)?;

    if req.datetime_from <= now {
        return Err(AppError::validation("datetime_from must be in the future"));
    }
    if req.datetime_to <= req.datetime_from {
        return Err(AppError::validation(
            "datetime_to must be after datetime_from",
        ));
    }
    if req.guests_count <= 0 {
        return Err(AppError::validation("guests_count must be positive"));
    }
    if req.datetime_to - req.datetime_from > Duration::hours(max_hours) {
        return Err(AppError::validation(format!(
            "booking too long (max {max_hours}h)"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_request() -> (BookingCreate, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let req = BookingCreate {
            customer_name: "Anna".to_string(),
            phone: "+375291232233".to_string(),
            email: None,
            datetime_from: now + Duration::hours(1),
            datetime_to: now + Duration::hours(2),
            guests_count: 2,
            table_preference: None,
            note: None,
        };
        (req, now)
    }

    fn reason(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_request() {
        let (req, now) = base_request();
        assert!(validate(&req, now, 6).is_ok());
    }

    #[test]
    fn rejects_start_in_the_past() {
        let (mut req, now) = base_request();
        req.datetime_from = now - Duration::minutes(5);
        let msg = reason(validate(&req, now, 6).unwrap_err());
        assert!(msg.contains("future"), "unexpected reason: {msg}");
    }

    #[test]
    fn rejects_start_exactly_now() {
        let (mut req, now) = base_request();
        req.datetime_from = now;
        assert!(validate(&req, now, 6).is_err());
    }

    #[test]
    fn rejects_end_before_start() {
        let (mut req, now) = base_request();
        req.datetime_to = req.datetime_from - Duration::minutes(30);
        let msg = reason(validate(&req, now, 6).unwrap_err());
        assert!(msg.contains("after datetime_from"), "unexpected reason: {msg}");
    }

    #[test]
    fn rejects_zero_length_window() {
        let (mut req, now) = base_request();
        req.datetime_to = req.datetime_from;
        assert!(validate(&req, now, 6).is_err());
    }

    #[test]
    fn rejects_non_positive_guests() {
        let (mut req, now) = base_request();
        req.guests_count = 0;
        let msg = reason(validate(&req, now, 6).unwrap_err());
        assert!(msg.contains("positive"), "unexpected reason: {msg}");
    }

    #[test]
    fn rejects_window_over_the_ceiling() {
        let (mut req, now) = base_request();
        req.datetime_to = req.datetime_from + Duration::hours(6) + Duration::minutes(1);
        let msg = reason(validate(&req, now, 6).unwrap_err());
        assert!(msg.contains("too long"), "unexpected reason: {msg}");
    }

    #[test]
    fn accepts_window_exactly_at_the_ceiling() {
        let (mut req, now) = base_request();
        req.datetime_to = req.datetime_from + Duration::hours(6);
        assert!(validate(&req, now, 6).is_ok());
    }

    #[test]
    fn rejects_bad_phone() {
        let (mut req, now) = base_request();
        req.phone = "call me".to_string();
        assert!(validate(&req, now, 6).is_err());
    }
}
