//! Booking Repository
//!
//! Persistence for bookings, including the conflict queries the table
//! allocator runs inside its transaction.

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Booking, BookingCreate, BookingStatus};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, customer_name, phone, email, datetime_from, datetime_to, \
     guests_count, table_id, table_preference, status, note, created_at, updated_at";

/// List bookings, newest window first, optionally filtered by status
pub async fn find_all(
    pool: &SqlitePool,
    status: Option<BookingStatus>,
) -> RepoResult<Vec<Booking>> {
    let bookings = match status {
        Some(s) => {
            sqlx::query_as::<_, Booking>(&format!(
                "SELECT {COLUMNS} FROM booking WHERE status = ?1 ORDER BY datetime_from DESC"
            ))
            .bind(s)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Booking>(&format!(
                "SELECT {COLUMNS} FROM booking ORDER BY datetime_from DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(bookings)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let booking =
        sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM booking WHERE id = ?1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(booking)
}

/// All bookings on `table_id` whose window overlaps `[start, end)`.
///
/// Half-open overlap: `existing.from < end AND existing.to > start`, so
/// touching endpoints do not conflict. Status is NOT filtered here — callers
/// decide which statuses block. `exclude_booking_id` lets an edit re-check a
/// window against everything but the booking being edited.
pub async fn conflicting_bookings(
    conn: &mut SqliteConnection,
    table_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_booking_id: Option<i64>,
) -> RepoResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {COLUMNS} FROM booking
         WHERE table_id = ?1 AND datetime_from < ?2 AND datetime_to > ?3
           AND (?4 IS NULL OR id <> ?4)"
    ))
    .bind(table_id)
    .bind(end)
    .bind(start)
    .bind(exclude_booking_id)
    .fetch_all(conn)
    .await?;
    Ok(bookings)
}

/// Whether any pending or confirmed booking blocks `[start, end)` on the table
pub async fn has_blocking_conflict(
    conn: &mut SqliteConnection,
    table_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM booking
         WHERE table_id = ?1
           AND status IN ('pending', 'confirmed')
           AND datetime_from < ?2 AND datetime_to > ?3",
    )
    .bind(table_id)
    .bind(end)
    .bind(start)
    .fetch_one(conn)
    .await?;
    Ok(count > 0)
}

/// Insert a new booking with the resolved table (or NULL) in `pending` status
pub async fn insert(
    conn: &mut SqliteConnection,
    data: &BookingCreate,
    table_id: Option<i64>,
) -> RepoResult<Booking> {
    let now = Utc::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO booking
            (customer_name, phone, email, datetime_from, datetime_to, guests_count,
             table_id, table_preference, status, note, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'pending', ?9, ?10, ?10)
         RETURNING id",
    )
    .bind(&data.customer_name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.datetime_from)
    .bind(data.datetime_to)
    .bind(data.guests_count)
    .bind(table_id)
    .bind(&data.table_preference)
    .bind(&data.note)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    let booking =
        sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM booking WHERE id = ?1"))
            .bind(id)
            .fetch_optional(conn)
            .await?;
    booking.ok_or_else(|| RepoError::Database("Failed to create booking".into()))
}

/// Set the status of the listed bookings; returns how many were updated.
///
/// Plain status mutation, as in the admin bulk actions. Does not re-run
/// conflict or capacity checks (known gap: confirming a booking whose table
/// meanwhile gained a confirmed overlap is not prevented here).
pub async fn set_status(
    pool: &SqlitePool,
    ids: &[i64],
    status: BookingStatus,
) -> RepoResult<u64> {
    let now = Utc::now();
    let mut updated = 0u64;
    for id in ids {
        let rows = sqlx::query("UPDATE booking SET status = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(status)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;
        updated += rows.rows_affected();
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::dining_table;
    use chrono::{Duration, TimeZone};
    use shared::models::DiningTableCreate;
    use tempfile::TempDir;

    async fn setup() -> (SqlitePool, i64, TempDir) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");
        let db = DbService::new(db_path.to_str().unwrap()).await.unwrap();
        let table = dining_table::create(
            &db.pool,
            DiningTableCreate {
                name: "T1".to_string(),
                seats_count: Some(4),
                location_tag: None,
            },
        )
        .await
        .unwrap();
        (db.pool, table.id, dir)
    }

    fn request(from: DateTime<Utc>, to: DateTime<Utc>) -> BookingCreate {
        BookingCreate {
            customer_name: "Anna".to_string(),
            phone: "+375291232233".to_string(),
            email: None,
            datetime_from: from,
            datetime_to: to,
            guests_count: 2,
            table_preference: None,
            note: None,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn finds_overlapping_windows_only() {
        let (pool, table_id, _dir) = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &request(at(10), at(11)), Some(table_id))
            .await
            .unwrap();

        // Overlapping query window
        let hits = conflicting_bookings(&mut conn, table_id, at(10) + Duration::minutes(30), at(12), None)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        // Disjoint window
        let hits = conflicting_bookings(&mut conn, table_id, at(12), at(13), None)
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn touching_endpoints_do_not_conflict() {
        let (pool, table_id, _dir) = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &request(at(10), at(11)), Some(table_id))
            .await
            .unwrap();

        // [11,12) touches [10,11) at 11:00 only
        let hits = conflicting_bookings(&mut conn, table_id, at(11), at(12), None)
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn exclusion_skips_the_booking_being_edited() {
        let (pool, table_id, _dir) = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let existing = insert(&mut conn, &request(at(10), at(11)), Some(table_id))
            .await
            .unwrap();

        let hits = conflicting_bookings(&mut conn, table_id, at(10), at(11), Some(existing.id))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn conflict_listing_ignores_status_but_blocking_check_does_not() {
        let (pool, table_id, _dir) = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let booking = insert(&mut conn, &request(at(10), at(11)), Some(table_id))
            .await
            .unwrap();
        drop(conn);
        set_status(&pool, &[booking.id], BookingStatus::Cancelled)
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        // Status-agnostic listing still reports the cancelled booking
        let hits = conflicting_bookings(&mut conn, table_id, at(10), at(11), None)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        // But it no longer blocks allocation
        let blocked = has_blocking_conflict(&mut conn, table_id, at(10), at(11))
            .await
            .unwrap();
        assert!(!blocked);
    }
}
