//! Restaurant Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::restaurant;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
};
use shared::models::{Restaurant, RestaurantUpdate};

/// GET /api/restaurant
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Restaurant>> {
    let info = restaurant::get(&state.db.pool).await?;
    Ok(Json(info))
}

/// PUT /api/restaurant
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.coords, "coords", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let info = restaurant::update(&state.db.pool, payload).await?;
    Ok(Json(info))
}
