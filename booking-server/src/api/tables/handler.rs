//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::dining_table;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

/// GET /api/tables - list active tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.db.pool).await?;
    Ok(Json(tables))
}

/// GET /api/tables/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {id} not found")))?;
    Ok(Json(table))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.location_tag, "location_tag", MAX_SHORT_TEXT_LEN)?;
    if payload.seats_count.is_some_and(|s| s <= 0) {
        return Err(AppError::validation("seats_count must be positive"));
    }

    let table = dining_table::create(&state.db.pool, payload).await?;
    tracing::info!(table = %table.name, seats = table.seats_count, "Table created");
    Ok(Json(table))
}

/// PUT /api/tables/:id
///
/// Capacity edits do not re-validate existing bookings; assignments made
/// earlier stay as they are.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.location_tag, "location_tag", MAX_SHORT_TEXT_LEN)?;
    if payload.seats_count.is_some_and(|s| s <= 0) {
        return Err(AppError::validation("seats_count must be positive"));
    }

    let table = dining_table::update(&state.db.pool, id, payload).await?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - bookings keep existing with table set to null
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = dining_table::delete(&state.db.pool, id).await?;
    if result {
        tracing::info!(table_id = id, "Table deleted, bookings detached");
    }
    Ok(Json(result))
}
