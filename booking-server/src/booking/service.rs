//! Booking creation workflow
//!
//! Validate → allocate → insert as one atomic unit. The conflict check and
//! the insert run in the same transaction, and allocations are serialized by
//! a mutex, so two concurrent overlapping requests can never both be handed
//! the same table (the classic check-then-act race).

use std::sync::Arc;

use chrono::Utc;
use shared::models::{Booking, BookingCreate, DiningTable};
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::booking::{allocator, request};
use crate::db::repository::booking as booking_repo;
use crate::utils::AppResult;

/// Result of the creation workflow: the persisted booking plus the resolved
/// table, if any. A `None` table is a successful outcome — staff assigns one
/// manually later.
#[derive(Debug, Clone)]
pub struct CreatedBooking {
    pub booking: Booking,
    pub assigned_table: Option<DiningTable>,
}

/// Booking workflow service
#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
    max_booking_hours: i64,
    /// Serializes allocate+insert across concurrent requests
    alloc_lock: Arc<Mutex<()>>,
}

impl BookingService {
    pub fn new(pool: SqlitePool, max_booking_hours: i64) -> Self {
        Self {
            pool,
            max_booking_hours,
            alloc_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a booking, auto-assigning the first free matching table.
    ///
    /// Either the booking is durably created with a consistent table
    /// assignment, or nothing is persisted. Validation failures surface
    /// before any database access.
    pub async fn create_booking(&self, req: BookingCreate) -> AppResult<CreatedBooking> {
        request::validate(&req, Utc::now(), self.max_booking_hours)?;

        let _guard = self.alloc_lock.lock().await;

        let mut tx = self.pool.begin().await?;
        let table = allocator::find_available_table(
            &mut tx,
            req.guests_count,
            req.datetime_from,
            req.datetime_to,
            req.table_preference.as_deref(),
        )
        .await?;
        let booking = booking_repo::insert(&mut tx, &req, table.as_ref().map(|t| t.id)).await?;
        tx.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            guests = req.guests_count,
            table = table.as_ref().map(|t| t.name.as_str()),
            "Booking created"
        );

        Ok(CreatedBooking {
            booking,
            assigned_table: table,
        })
    }
}
