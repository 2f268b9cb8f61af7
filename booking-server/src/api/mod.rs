//! API route modules
//!
//! - [`health`] - health check
//! - [`bookings`] - public booking creation + admin booking management
//! - [`tables`] - table inventory
//! - [`categories`] - menu categories
//! - [`menu_items`] - menu items
//! - [`restaurant`] - restaurant info
//! - [`social_links`] - social links
//! - [`settings`] - key/value settings

pub mod bookings;
pub mod categories;
pub mod health;
pub mod menu_items;
pub mod restaurant;
pub mod settings;
pub mod social_links;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(bookings::router())
        .merge(tables::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(restaurant::router())
        .merge(social_links::router())
        .merge(settings::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
