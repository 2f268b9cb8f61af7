//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::booking as booking_repo;
use crate::utils::{AppError, AppResult};
use shared::models::{Booking, BookingCreate, BookingStatus};

/// Response for the public creation endpoint
#[derive(Debug, Serialize)]
pub struct BookingCreated {
    pub id: i64,
    pub status: BookingStatus,
    /// Name of the auto-assigned table; null when no table was free
    pub assigned_table: Option<String>,
}

/// POST /api/bookings - public booking creation with table auto-assignment
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<BookingCreated>)> {
    let created = state.bookings.create_booking(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            id: created.booking.id,
            status: created.booking.status,
            assigned_table: created.assigned_table.map(|t| t.name),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<BookingStatus>,
}

/// GET /api/bookings?status= - list bookings, newest window first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking_repo::find_all(&state.db.pool, query.status).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = booking_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize)]
pub struct BulkIds {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct BulkResult {
    pub updated: u64,
}

/// POST /api/bookings/confirm - bulk confirm
///
/// Status mutation only; the window is not re-checked against other
/// confirmed bookings here.
pub async fn confirm(
    State(state): State<ServerState>,
    Json(payload): Json<BulkIds>,
) -> AppResult<Json<BulkResult>> {
    let updated =
        booking_repo::set_status(&state.db.pool, &payload.ids, BookingStatus::Confirmed).await?;
    tracing::info!(count = updated, "Bookings confirmed");
    Ok(Json(BulkResult { updated }))
}

/// POST /api/bookings/cancel - bulk cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Json(payload): Json<BulkIds>,
) -> AppResult<Json<BulkResult>> {
    let updated =
        booking_repo::set_status(&state.db.pool, &payload.ids, BookingStatus::Cancelled).await?;
    tracing::info!(count = updated, "Bookings cancelled");
    Ok(Json(BulkResult { updated }))
}
