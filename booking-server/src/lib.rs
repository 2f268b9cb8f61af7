//! Booking Server - restaurant menu, table inventory and table bookings
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── booking/       # Request validation, conflict-aware table allocation
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # Errors, logging, validation helpers
//! ```
//!
//! The only non-trivial piece is the [`booking`] module: given a requested
//! time window, party size and optional location preference it picks the
//! first free table (smallest fit, preferred location first) inside the same
//! transaction that persists the booking.

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

pub use booking::BookingService;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
