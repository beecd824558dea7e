//! Menu Item Repository

use shared::models::{Category, MenuItem, MenuItemCreate, MenuItemUpdate, Recipe, RecipeUpsert};
use sqlx::SqlitePool;

use super::RepoResult;

const COLUMNS: &str = "id, name, description, price, category, preparation_time, is_available";

/// Available items, optionally limited to one category
pub async fn list_available(
    pool: &SqlitePool,
    category: Option<Category>,
) -> RepoResult<Vec<MenuItem>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM menu_items \
         WHERE is_available = 1 AND (?1 IS NULL OR category = ?1) \
         ORDER BY category, name"
    );
    let items = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(category.map(|c| c.code()))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("SELECT {COLUMNS} FROM menu_items WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: &MenuItemCreate) -> RepoResult<MenuItem> {
    let sql = format!(
        "INSERT INTO menu_items (name, description, price, category, preparation_time, is_available) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.category.code())
        .bind(data.preparation_time)
        .bind(data.is_available)
        .fetch_one(pool)
        .await?;
    Ok(item)
}

/// Partial update; `None` fields keep their stored value
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &MenuItemUpdate,
) -> RepoResult<Option<MenuItem>> {
    let sql = format!(
        "UPDATE menu_items SET \
            name = COALESCE(?, name), \
            description = COALESCE(?, description), \
            price = COALESCE(?, price), \
            category = COALESCE(?, category), \
            preparation_time = COALESCE(?, preparation_time), \
            is_available = COALESCE(?, is_available) \
         WHERE id = ? RETURNING {COLUMNS}"
    );
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(data.name.as_deref())
        .bind(data.description.as_deref())
        .bind(data.price)
        .bind(data.category.map(|c| c.code()))
        .bind(data.preparation_time)
        .bind(data.is_available)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

// ── Recipes ─────────────────────────────────────────────────────────

/// Insert or replace the (menu item, ingredient) row
pub async fn upsert_recipe(pool: &SqlitePool, data: &RecipeUpsert) -> RepoResult<Recipe> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        INSERT INTO recipes (menu_item_id, ingredient_id, quantity_required)
        VALUES (?, ?, ?)
        ON CONFLICT (menu_item_id, ingredient_id)
        DO UPDATE SET quantity_required = excluded.quantity_required
        RETURNING id, menu_item_id, ingredient_id, quantity_required
        "#,
    )
    .bind(data.menu_item)
    .bind(data.ingredient)
    .bind(data.quantity_required)
    .fetch_one(pool)
    .await?;
    Ok(recipe)
}

pub async fn list_recipe(pool: &SqlitePool, menu_item_id: i64) -> RepoResult<Vec<Recipe>> {
    let rows = sqlx::query_as::<_, Recipe>(
        "SELECT id, menu_item_id, ingredient_id, quantity_required \
         FROM recipes WHERE menu_item_id = ? ORDER BY ingredient_id",
    )
    .bind(menu_item_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
