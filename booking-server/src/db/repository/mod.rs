//! Repository Module
//!
//! Function-style CRUD operations over the SQLite pool, one module per
//! resource. Queries that must observe transaction state take a
//! `&mut SqliteConnection` so callers can run them inside a transaction.

pub mod booking;
pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod restaurant;
pub mod setting;
pub mod social_link;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
