//! Menu Category Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuCategory>> {
    let categories = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name_i18n, sort_order FROM menu_category ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuCategory>> {
    let category = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name_i18n, sort_order FROM menu_category WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn create(pool: &SqlitePool, data: MenuCategoryCreate) -> RepoResult<MenuCategory> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu_category (name_i18n, sort_order) VALUES (?1, ?2) RETURNING id",
    )
    .bind(&data.name_i18n)
    .bind(data.sort_order.unwrap_or(0))
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: MenuCategoryUpdate,
) -> RepoResult<MenuCategory> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    let name_i18n = data.name_i18n.unwrap_or(existing.name_i18n);
    let sort_order = data.sort_order.unwrap_or(existing.sort_order);

    sqlx::query("UPDATE menu_category SET name_i18n = ?1, sort_order = ?2 WHERE id = ?3")
        .bind(&name_i18n)
        .bind(sort_order)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Hard delete; menu items in the category are removed with it (FK CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_category WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
