//! Order Repository
//!
//! Read paths and the status update. Order creation lives in
//! `orders::processor` because it spans several tables in one transaction.

use shared::models::{Order, OrderDetail, OrderItem, OrderStatus};
use sqlx::{Executor, Sqlite, SqliteConnection};

use super::RepoResult;

const ORDER_COLUMNS: &str = "id, table_id, status, created_at, updated_at, total_price, is_takeaway";

pub async fn find_by_id<'c, E>(executor: E, id: i64) -> RepoResult<Option<Order>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(order)
}

pub async fn items_for<'c, E>(executor: E, order_id: i64) -> RepoResult<Vec<OrderItem>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, menu_item_id, quantity, special_requests \
         FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    Ok(items)
}

/// Order header with its lines
pub async fn load_detail(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<OrderDetail>> {
    let Some(order) = find_by_id(&mut *conn, id).await? else {
        return Ok(None);
    };
    let items = items_for(&mut *conn, id).await?;
    Ok(Some(OrderDetail { order, items }))
}

/// Move the order to `next` only if its current status is one of `from`.
///
/// The check and the write are one statement, so concurrent updates cannot
/// both pass the state check. Returns whether a row changed.
pub async fn update_status_from<'c, E>(
    executor: E,
    id: i64,
    next: OrderStatus,
    from: &[OrderStatus],
    now: i64,
) -> RepoResult<bool>
where
    E: Executor<'c, Database = Sqlite>,
{
    if from.is_empty() {
        return Ok(false);
    }
    let placeholders = vec!["?"; from.len()].join(", ");
    let sql = format!(
        "UPDATE orders SET status = ?, updated_at = ? WHERE id = ? AND status IN ({placeholders})"
    );
    let mut query = sqlx::query(&sql).bind(next.code()).bind(now).bind(id);
    for status in from {
        query = query.bind(status.code());
    }
    let result = query.execute(executor).await?;
    Ok(result.rows_affected() > 0)
}
