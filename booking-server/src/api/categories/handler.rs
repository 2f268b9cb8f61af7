//! Menu Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{category, menu_item};
use crate::utils::{AppError, AppResult};
use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem};

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuCategory>>> {
    let categories = category::find_all(&state.db.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuCategory>> {
    let found = category::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCategoryCreate>,
) -> AppResult<Json<MenuCategory>> {
    if !payload.name_i18n.is_object() {
        return Err(AppError::validation("name_i18n must be a language map"));
    }
    let created = category::create(&state.db.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    if payload.name_i18n.as_ref().is_some_and(|v| !v.is_object()) {
        return Err(AppError::validation("name_i18n must be a language map"));
    }
    let updated = category::update(&state.db.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/categories/:id - items in the category are removed with it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = category::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}

/// GET /api/categories/:id/items
pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<MenuItem>>> {
    category::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    let items = menu_item::find_by_category(&state.db.pool, id).await?;
    Ok(Json(items))
}
