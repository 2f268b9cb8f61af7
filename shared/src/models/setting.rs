//! Setting Model

use serde::{Deserialize, Serialize};

/// Key/value setting entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
}
