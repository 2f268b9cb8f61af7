//! Social Link API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::social_link;
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN, validate_required_text};
use crate::utils::AppResult;
use shared::models::{SocialLink, SocialLinkCreate, SocialLinkUpdate};

/// GET /api/social-links
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SocialLink>>> {
    let links = social_link::find_all(&state.db.pool).await?;
    Ok(Json(links))
}

/// POST /api/social-links
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SocialLinkCreate>,
) -> AppResult<Json<SocialLink>> {
    validate_required_text(&payload.platform, "platform", MAX_NAME_LEN)?;
    validate_required_text(&payload.url, "url", MAX_URL_LEN)?;
    let link = social_link::create(&state.db.pool, payload).await?;
    Ok(Json(link))
}

/// PUT /api/social-links/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SocialLinkUpdate>,
) -> AppResult<Json<SocialLink>> {
    if let Some(url) = &payload.url {
        validate_required_text(url, "url", MAX_URL_LEN)?;
    }
    let link = social_link::update(&state.db.pool, id, payload).await?;
    Ok(Json(link))
}

/// DELETE /api/social-links/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = social_link::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}
