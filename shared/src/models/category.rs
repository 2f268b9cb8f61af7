//! Menu Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
///
/// `name_i18n` maps a language code to the display name,
/// e.g. `{"ru": "Завтраки", "en": "Breakfasts"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuCategory {
    pub id: i64,
    pub name_i18n: serde_json::Value,
    pub sort_order: i64,
}

/// Create menu category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryCreate {
    pub name_i18n: serde_json::Value,
    pub sort_order: Option<i64>,
}

/// Update menu category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryUpdate {
    pub name_i18n: Option<serde_json::Value>,
    pub sort_order: Option<i64>,
}
