//! Booking API module
//!
//! `POST /api/bookings` is the public endpoint; the rest is admin-side
//! booking management.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/confirm", post(handler::confirm))
        .route("/cancel", post(handler::cancel))
}
