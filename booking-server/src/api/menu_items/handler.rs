//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{category, menu_item};
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

/// GET /api/menu-items - full menu, category order first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.db.pool).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu-items
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.slug, "slug", MAX_SHORT_TEXT_LEN)?;
    if !payload.name_i18n.is_object() {
        return Err(AppError::validation("name_i18n must be a language map"));
    }
    if payload.price_cents <= 0 {
        return Err(AppError::validation("price_cents must be positive"));
    }
    category::find_by_id(&state.db.pool, payload.category_id)
        .await?
        .ok_or_else(|| {
            AppError::validation(format!("Category {} does not exist", payload.category_id))
        })?;

    let item = menu_item::create(&state.db.pool, payload).await?;
    tracing::info!(slug = %item.slug, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu-items/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if payload.price_cents.is_some_and(|p| p <= 0) {
        return Err(AppError::validation("price_cents must be positive"));
    }
    if let Some(category_id) = payload.category_id {
        category::find_by_id(&state.db.pool, category_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Category {category_id} does not exist"))
            })?;
    }

    let item = menu_item::update(&state.db.pool, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = menu_item::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}
