//! Server state - shared service handles

use crate::booking::BookingService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state, cheap to clone (services hold `Arc`/pool handles)
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database service (SQLite pool)
    pub db: DbService,
    /// Booking workflow: validation + table allocation + atomic insert
    pub bookings: BookingService,
}

impl ServerState {
    /// Open the database and wire up services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;
        let bookings = BookingService::new(db.pool.clone(), config.max_booking_hours);

        Ok(Self {
            config: config.clone(),
            db,
            bookings,
        })
    }
}
