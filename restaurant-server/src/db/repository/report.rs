//! Sales reporting queries

use shared::money::Hundredths;
use shared::models::{OrderStatus, PopularItem};
use sqlx::SqlitePool;

use super::RepoResult;

/// How many menu items the popularity ranking returns
pub const POPULAR_ITEMS_LIMIT: i64 = 5;

/// Sum of `total_price` over sale orders (Ready, Served) created in `[start, end)`
pub async fn total_sales(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<Hundredths> {
    let sales: Vec<OrderStatus> = OrderStatus::ALL.into_iter().filter(|s| s.is_sale()).collect();
    let placeholders = vec!["?"; sales.len()].join(", ");
    let sql = format!(
        "SELECT COALESCE(SUM(total_price), 0) FROM orders \
         WHERE created_at >= ? AND created_at < ? AND status IN ({placeholders})"
    );

    let mut query = sqlx::query_scalar::<_, i64>(&sql).bind(start).bind(end);
    for status in sales {
        query = query.bind(status.code());
    }
    let total = query.fetch_one(pool).await?;
    Ok(Hundredths::from_raw(total))
}

/// Top menu items by quantity over lines of orders created in `[start, end)`,
/// regardless of order status. Ties go to the alphabetically first name.
pub async fn popular_items(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<Vec<PopularItem>> {
    let rows = sqlx::query_as::<_, PopularItem>(
        r#"
        SELECT m.name AS name, SUM(oi.quantity) AS total_quantity
        FROM order_items oi
        JOIN orders o ON o.id = oi.order_id
        JOIN menu_items m ON m.id = oi.menu_item_id
        WHERE o.created_at >= ? AND o.created_at < ?
        GROUP BY m.id, m.name
        ORDER BY total_quantity DESC, m.name ASC
        LIMIT ?
        "#,
    )
    .bind(start)
    .bind(end)
    .bind(POPULAR_ITEMS_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
