//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Prices are integer cents to avoid float rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name_i18n: serde_json::Value,
    pub description_i18n: serde_json::Value,
    pub price_cents: i64,
    pub currency: String,
    /// Image path or URL
    pub image: Option<String>,
    /// Portion weight, free text (e.g. "250 g")
    pub weight: Option<String>,
    pub allergens: Option<String>,
    pub is_available: bool,
    /// Free-form tags, e.g. ["vegan", "gluten-free"]
    pub tags: serde_json::Value,
    pub slug: String,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub category_id: i64,
    pub name_i18n: serde_json::Value,
    #[serde(default)]
    pub description_i18n: Option<serde_json::Value>,
    pub price_cents: i64,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub weight: Option<String>,
    pub allergens: Option<String>,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
    pub slug: String,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub category_id: Option<i64>,
    pub name_i18n: Option<serde_json::Value>,
    pub description_i18n: Option<serde_json::Value>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub weight: Option<String>,
    pub allergens: Option<String>,
    pub is_available: Option<bool>,
    pub tags: Option<serde_json::Value>,
    pub slug: Option<String>,
}
