//! Restaurant Info Repository
//!
//! Single-row table seeded by the initial migration.

use super::{RepoError, RepoResult};
use shared::models::{Restaurant, RestaurantUpdate};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool) -> RepoResult<Restaurant> {
    let info = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, coords, phone, working_hours FROM restaurant WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?;
    info.ok_or_else(|| RepoError::Database("Restaurant info row missing".into()))
}

pub async fn update(pool: &SqlitePool, data: RestaurantUpdate) -> RepoResult<Restaurant> {
    let existing = get(pool).await?;

    let name = data.name.unwrap_or(existing.name);
    let address = data.address.unwrap_or(existing.address);
    let coords = data.coords.or(existing.coords);
    let phone = data.phone.or(existing.phone);
    let working_hours = data.working_hours.unwrap_or(existing.working_hours);

    sqlx::query(
        "UPDATE restaurant
         SET name = ?1, address = ?2, coords = ?3, phone = ?4, working_hours = ?5
         WHERE id = 1",
    )
    .bind(&name)
    .bind(&address)
    .bind(&coords)
    .bind(&phone)
    .bind(&working_hours)
    .execute(pool)
    .await?;

    get(pool).await
}
