//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// `pending` and `confirmed` block the table for their window; `cancelled`
/// and `completed` never participate in conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Whether this status reserves the table slot
    pub fn is_blocking(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

/// Booking entity
///
/// Occupies `table_id` for the half-open window `[datetime_from, datetime_to)`.
/// `table_id` is nullable: a booking may exist before staff assigns a table,
/// and survives table deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub datetime_from: DateTime<Utc>,
    pub datetime_to: DateTime<Utc>,
    pub guests_count: i64,
    pub table_id: Option<i64>,
    /// Requested location tag, matched against `DiningTable::location_tag`
    pub table_preference: Option<String>,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Half-open interval overlap: touching endpoints do not conflict
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.datetime_from < end && self.datetime_to > start
    }
}

/// Public booking request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub datetime_from: DateTime<Utc>,
    pub datetime_to: DateTime<Utc>,
    pub guests_count: i64,
    pub table_preference: Option<String>,
    pub note: Option<String>,
}
