//! Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::setting;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::Setting;

/// GET /api/settings
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Setting>>> {
    let settings = setting::find_all(&state.db.pool).await?;
    Ok(Json(settings))
}

/// GET /api/settings/:key
pub async fn get_by_key(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<Setting>> {
    let found = setting::find_by_key(&state.db.pool, &key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Setting '{key}' not found")))?;
    Ok(Json(found))
}

/// PUT /api/settings/:key - upsert a JSON value
pub async fn put(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(value): Json<serde_json::Value>,
) -> AppResult<Json<Setting>> {
    validate_required_text(&key, "key", MAX_NAME_LEN)?;
    let saved = setting::upsert(&state.db.pool, &key, &value).await?;
    Ok(Json(saved))
}
