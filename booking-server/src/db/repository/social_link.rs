//! Social Link Repository

use super::{RepoError, RepoResult};
use shared::models::{SocialLink, SocialLinkCreate, SocialLinkUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<SocialLink>> {
    let links = sqlx::query_as::<_, SocialLink>(
        "SELECT id, platform, url, icon, sort_order FROM social_link ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(links)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<SocialLink>> {
    let link = sqlx::query_as::<_, SocialLink>(
        "SELECT id, platform, url, icon, sort_order FROM social_link WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(link)
}

pub async fn create(pool: &SqlitePool, data: SocialLinkCreate) -> RepoResult<SocialLink> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO social_link (platform, url, icon, sort_order)
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(&data.platform)
    .bind(&data.url)
    .bind(&data.icon)
    .bind(data.sort_order.unwrap_or(0))
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create social link".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SocialLinkUpdate) -> RepoResult<SocialLink> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Social link {id} not found")))?;

    let platform = data.platform.unwrap_or(existing.platform);
    let url = data.url.unwrap_or(existing.url);
    let icon = data.icon.or(existing.icon);
    let sort_order = data.sort_order.unwrap_or(existing.sort_order);

    sqlx::query(
        "UPDATE social_link SET platform = ?1, url = ?2, icon = ?3, sort_order = ?4 WHERE id = ?5",
    )
    .bind(&platform)
    .bind(&url)
    .bind(&icon)
    .bind(sort_order)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Social link {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM social_link WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
