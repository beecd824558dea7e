//! Dining Table Repository

use shared::models::{DiningTable, DiningTableCreate, TableStatus};
use sqlx::{Executor, Sqlite, SqlitePool};

use super::RepoResult;

const COLUMNS: &str = "id, number, capacity, status, location";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let sql = format!("SELECT {COLUMNS} FROM dining_tables ORDER BY number");
    let tables = sqlx::query_as::<_, DiningTable>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(tables)
}

pub async fn find_by_id<'c, E>(executor: E, id: i64) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let sql = format!("SELECT {COLUMNS} FROM dining_tables WHERE id = ?");
    let table = sqlx::query_as::<_, DiningTable>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(table)
}

/// Fails with `RepoError::Duplicate` when the number is taken
pub async fn create(pool: &SqlitePool, data: &DiningTableCreate) -> RepoResult<DiningTable> {
    let sql = format!(
        "INSERT INTO dining_tables (number, capacity, status, location) \
         VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let table = sqlx::query_as::<_, DiningTable>(&sql)
        .bind(data.number.trim())
        .bind(data.capacity)
        .bind(data.status.code())
        .bind(&data.location)
        .fetch_one(pool)
        .await?;
    Ok(table)
}

pub async fn update_status<'c, E>(
    executor: E,
    id: i64,
    status: TableStatus,
) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let sql = format!("UPDATE dining_tables SET status = ? WHERE id = ? RETURNING {COLUMNS}");
    let table = sqlx::query_as::<_, DiningTable>(&sql)
        .bind(status.code())
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(table)
}

/// Tables seating `party_size`, currently Available, with no reservation
/// starting inside `[window_start, window_end)`
pub async fn find_available(
    pool: &SqlitePool,
    party_size: i64,
    window_start: i64,
    window_end: i64,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        r#"
        SELECT t.id, t.number, t.capacity, t.status, t.location
        FROM dining_tables t
        WHERE t.capacity >= ?1
          AND t.status = 'AV'
          AND NOT EXISTS (
              SELECT 1 FROM reservations r
              WHERE r.table_id = t.id
                AND r.reservation_time >= ?2
                AND r.reservation_time < ?3
          )
        ORDER BY t.capacity, t.number
        "#,
    )
    .bind(party_size)
    .bind(window_start)
    .bind(window_end)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}
