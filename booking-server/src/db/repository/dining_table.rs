//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use sqlx::{SqliteConnection, SqlitePool};

/// Find all active dining tables
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, name, seats_count, location_tag, is_active
         FROM dining_table WHERE is_active = 1 ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, name, seats_count, location_tag, is_active FROM dining_table WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, name, seats_count, location_tag, is_active
         FROM dining_table WHERE name = ?1 LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// Active tables that can seat the party, smallest first.
///
/// Takes a connection so the allocator can read a snapshot inside the same
/// transaction that inserts the booking.
pub async fn find_candidates(
    conn: &mut SqliteConnection,
    guests_count: i64,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, name, seats_count, location_tag, is_active
         FROM dining_table
         WHERE is_active = 1 AND seats_count >= ?1
         ORDER BY seats_count, id",
    )
    .bind(guests_count)
    .fetch_all(conn)
    .await?;
    Ok(tables)
}

pub async fn create(pool: &SqlitePool, data: DiningTableCreate) -> RepoResult<DiningTable> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Table '{}' already exists",
            data.name
        )));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO dining_table (name, seats_count, location_tag)
         VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.seats_count.unwrap_or(4))
    .bind(&data.location_tag)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: DiningTableUpdate,
) -> RepoResult<DiningTable> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))?;

    if let Some(new_name) = &data.name
        && *new_name != existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Table '{new_name}' already exists"
        )));
    }

    let name = data.name.unwrap_or(existing.name);
    let seats_count = data.seats_count.unwrap_or(existing.seats_count);
    let location_tag = data.location_tag.or(existing.location_tag);
    let is_active = data.is_active.unwrap_or(existing.is_active);

    sqlx::query(
        "UPDATE dining_table
         SET name = ?1, seats_count = ?2, location_tag = ?3, is_active = ?4
         WHERE id = ?5",
    )
    .bind(&name)
    .bind(seats_count)
    .bind(&location_tag)
    .bind(is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
}

/// Hard delete a table. Bookings referencing it keep existing with
/// `table_id` set to NULL (FK ON DELETE SET NULL).
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM dining_table WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
