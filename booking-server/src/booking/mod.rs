//! Booking core
//!
//! The one piece of this system with real logic:
//!
//! - [`request`] - pre-persistence validation of booking requests
//! - [`allocator`] - first-fit table selection with location preference
//! - [`service`] - the atomic validate → allocate → insert workflow

pub mod allocator;
pub mod request;
pub mod service;

pub use service::BookingService;
