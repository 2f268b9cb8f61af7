//! Setting Repository
//!
//! Key/value JSON settings with upsert semantics.

use super::RepoResult;
use shared::models::Setting;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Setting>> {
    let settings =
        sqlx::query_as::<_, Setting>("SELECT key, value FROM setting ORDER BY key")
            .fetch_all(pool)
            .await?;
    Ok(settings)
}

pub async fn find_by_key(pool: &SqlitePool, key: &str) -> RepoResult<Option<Setting>> {
    let setting = sqlx::query_as::<_, Setting>("SELECT key, value FROM setting WHERE key = ?1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(setting)
}

pub async fn upsert(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> RepoResult<Setting> {
    sqlx::query(
        "INSERT INTO setting (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(Setting {
        key: key.to_string(),
        value: value.clone(),
    })
}
