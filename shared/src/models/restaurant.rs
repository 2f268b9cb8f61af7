//! Restaurant Info Model

use serde::{Deserialize, Serialize};

/// Restaurant info entity (single row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// "lat,lon"
    pub coords: Option<String>,
    pub phone: Option<String>,
    /// Day-of-week to hours, e.g. `{"mon": "9:00-21:00"}`
    pub working_hours: serde_json::Value,
}

/// Update restaurant info payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub coords: Option<String>,
    pub phone: Option<String>,
    pub working_hours: Option<serde_json::Value>,
}
