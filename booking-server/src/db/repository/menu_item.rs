//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, category_id, name_i18n, description_i18n, price_cents, currency, \
     image, weight, allergens, is_available, tags, slug";

/// List items ordered by category order, then item id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT m.id, m.category_id, m.name_i18n, m.description_i18n, m.price_cents,
                m.currency, m.image, m.weight, m.allergens, m.is_available, m.tags, m.slug
         FROM menu_item m
         JOIN menu_category c ON c.id = m.category_id
         ORDER BY c.sort_order, m.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE category_id = ?1 ORDER BY id"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item =
        sqlx::query_as::<_, MenuItem>(&format!("SELECT {COLUMNS} FROM menu_item WHERE id = ?1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(item)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE slug = ?1 LIMIT 1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    if find_by_slug(pool, &data.slug).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Menu item slug '{}' already exists",
            data.slug
        )));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu_item
            (category_id, name_i18n, description_i18n, price_cents, currency,
             image, weight, allergens, is_available, tags, slug)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         RETURNING id",
    )
    .bind(data.category_id)
    .bind(&data.name_i18n)
    .bind(data.description_i18n.unwrap_or_else(|| serde_json::json!({})))
    .bind(data.price_cents)
    .bind(data.currency.unwrap_or_else(|| "RUB".to_string()))
    .bind(&data.image)
    .bind(&data.weight)
    .bind(&data.allergens)
    .bind(data.is_available.unwrap_or(true))
    .bind(data.tags.unwrap_or_else(|| serde_json::json!([])))
    .bind(&data.slug)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))?;

    if let Some(new_slug) = &data.slug
        && *new_slug != existing.slug
        && find_by_slug(pool, new_slug).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Menu item slug '{new_slug}' already exists"
        )));
    }

    let category_id = data.category_id.unwrap_or(existing.category_id);
    let name_i18n = data.name_i18n.unwrap_or(existing.name_i18n);
    let description_i18n = data.description_i18n.unwrap_or(existing.description_i18n);
    let price_cents = data.price_cents.unwrap_or(existing.price_cents);
    let currency = data.currency.unwrap_or(existing.currency);
    let image = data.image.or(existing.image);
    let weight = data.weight.or(existing.weight);
    let allergens = data.allergens.or(existing.allergens);
    let is_available = data.is_available.unwrap_or(existing.is_available);
    let tags = data.tags.unwrap_or(existing.tags);
    let slug = data.slug.unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE menu_item
         SET category_id = ?1, name_i18n = ?2, description_i18n = ?3, price_cents = ?4,
             currency = ?5, image = ?6, weight = ?7, allergens = ?8, is_available = ?9,
             tags = ?10, slug = ?11
         WHERE id = ?12",
    )
    .bind(category_id)
    .bind(&name_i18n)
    .bind(&description_i18n)
    .bind(price_cents)
    .bind(&currency)
    .bind(&image)
    .bind(&weight)
    .bind(&allergens)
    .bind(is_available)
    .bind(&tags)
    .bind(&slug)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
