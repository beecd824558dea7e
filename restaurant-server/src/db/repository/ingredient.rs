//! Ingredient Repository

use shared::money::Hundredths;
use shared::models::{Ingredient, IngredientCreate};
use sqlx::{Executor, Sqlite, SqlitePool};

use super::RepoResult;

const COLUMNS: &str = "id, name, unit, current_stock, alert_threshold, supplier";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Ingredient>> {
    let sql = format!("SELECT {COLUMNS} FROM ingredients ORDER BY name");
    let rows = sqlx::query_as::<_, Ingredient>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id<'c, E>(executor: E, id: i64) -> RepoResult<Option<Ingredient>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let sql = format!("SELECT {COLUMNS} FROM ingredients WHERE id = ?");
    let row = sqlx::query_as::<_, Ingredient>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Ingredients whose stock is strictly below their alert threshold
pub async fn find_low_stock(pool: &SqlitePool) -> RepoResult<Vec<Ingredient>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM ingredients \
         WHERE current_stock < alert_threshold \
         ORDER BY current_stock - alert_threshold, name"
    );
    let rows = sqlx::query_as::<_, Ingredient>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fails with `RepoError::Duplicate` when the name is taken
pub async fn create(pool: &SqlitePool, data: &IngredientCreate) -> RepoResult<Ingredient> {
    let sql = format!(
        "INSERT INTO ingredients (name, unit, current_stock, alert_threshold, supplier) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, Ingredient>(&sql)
        .bind(data.name.trim())
        .bind(&data.unit)
        .bind(data.current_stock)
        .bind(data.alert_threshold)
        .bind(&data.supplier)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Add stock with a store-side relative update
pub async fn restock(
    pool: &SqlitePool,
    id: i64,
    quantity: Hundredths,
) -> RepoResult<Option<Ingredient>> {
    let sql = format!(
        "UPDATE ingredients SET current_stock = current_stock + ? \
         WHERE id = ? RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, Ingredient>(&sql)
        .bind(quantity)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
