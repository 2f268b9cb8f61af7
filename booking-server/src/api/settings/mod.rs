//! Settings API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/settings", get(handler::list))
        .route(
            "/api/settings/{key}",
            get(handler::get_by_key).put(handler::put),
        )
}
