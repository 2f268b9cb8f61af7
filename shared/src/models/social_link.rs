//! Social Link Model

use serde::{Deserialize, Serialize};

/// Social link entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SocialLink {
    pub id: i64,
    pub platform: String,
    pub url: String,
    /// Icon name or path
    pub icon: Option<String>,
    pub sort_order: i64,
}

/// Create social link payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkCreate {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update social link payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkUpdate {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}
