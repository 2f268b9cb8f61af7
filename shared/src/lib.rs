//! Shared data models for the booking backend.
//!
//! Plain serde entities used by the server and any future clients.
//! Database derives (`sqlx::FromRow`) are gated behind the `db` feature so
//! client-side consumers do not pull in sqlx.

pub mod models;

pub use models::{
    Booking, BookingCreate, BookingStatus, DiningTable, DiningTableCreate, DiningTableUpdate,
    MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    Restaurant, RestaurantUpdate, Setting, SocialLink, SocialLinkCreate, SocialLinkUpdate,
};
