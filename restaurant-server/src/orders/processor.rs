//! Order processor
//!
//! Every statement that computes money or stock runs inside SQLite, so the
//! persisted total and the ingredient levels never depend on values read
//! earlier by this process.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderCreate, OrderDetail, OrderStatus};
use shared::money::{Hundredths, MAX_LEDGER_AMOUNT};
use shared::util::now_millis;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::db::repository::{RepoError, RepoResult, order};
use crate::utils::validation::{
    FieldErrors, MAX_LINE_QUANTITY, MAX_NOTE_LEN, validate_optional_text, validate_range,
};

/// Ingredient level after an order's decrement
#[derive(Debug, Clone, FromRow)]
struct StockLevel {
    id: i64,
    name: String,
    current_stock: Hundredths,
}

/// Reject malformed orders before touching the database
pub fn validate_order(input: &OrderCreate) -> AppResult<()> {
    if input.items.is_empty() {
        return Err(AppError::field(
            ErrorCode::OrderEmpty,
            "items",
            "Order must contain at least one item",
        ));
    }

    let mut errors = FieldErrors::new();
    for (idx, line) in input.items.iter().enumerate() {
        errors.check(validate_range(
            line.quantity,
            &format!("items[{idx}].quantity"),
            1,
            MAX_LINE_QUANTITY,
        ));
        errors.check(validate_optional_text(
            &line.special_requests,
            &format!("items[{idx}].special_requests"),
            MAX_NOTE_LEN,
        ));
    }
    errors.finish()
}

/// Create an order with its lines, total and stock decrements atomically.
///
/// Any failure drops the transaction, so an order referencing an unknown
/// table or menu item leaves no rows and no stock change behind.
pub async fn place_order(pool: &SqlitePool, input: &OrderCreate) -> AppResult<OrderDetail> {
    validate_order(input)?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    let now = now_millis();

    // Write first: SQLite takes the write lock here instead of upgrading a
    // read snapshot later, which would fail under concurrent orders.
    let order_id = insert_header(&mut tx, input, now)
        .await?
        .ok_or_else(|| table_not_found(input.table))?;

    for line in &input.items {
        let inserted = sqlx::query(
            "INSERT INTO order_items (order_id, menu_item_id, quantity, special_requests) \
             SELECT ?, id, ?, ? FROM menu_items WHERE id = ?",
        )
        .bind(order_id)
        .bind(line.quantity)
        .bind(&line.special_requests)
        .bind(line.menu_item)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::from)?;

        if inserted.rows_affected() == 0 {
            return Err(
                AppError::with_message(
                    ErrorCode::MenuItemNotFound,
                    format!("Menu item {} not found", line.menu_item),
                )
                .with_detail("menu_item", line.menu_item),
            );
        }
    }

    let total = persist_total(&mut tx, order_id).await.map_err(|e| match e {
        RepoError::Validation(_) => AppError::field(
            ErrorCode::ValueOutOfRange,
            "items",
            format!("order total exceeds {MAX_LEDGER_AMOUNT}"),
        ),
        other => other.into(),
    })?;
    let levels = decrement_stock(&mut tx, order_id).await?;

    for level in levels.iter().filter(|l| l.current_stock.is_negative()) {
        tracing::warn!(
            ingredient_id = level.id,
            ingredient = %level.name,
            stock = %level.current_stock,
            order_id,
            "Ingredient stock below zero"
        );
    }

    let detail = order::load_detail(&mut tx, order_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Order {order_id} missing after insert")))?;

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        order_id,
        table = ?input.table,
        takeaway = input.is_takeaway,
        lines = detail.items.len(),
        total = %total,
        "Order placed"
    );
    Ok(detail)
}

/// Insert the header with a zero total. `None` when the table does not exist.
async fn insert_header(
    conn: &mut SqliteConnection,
    input: &OrderCreate,
    now: i64,
) -> RepoResult<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (table_id, status, created_at, updated_at, total_price, is_takeaway) \
         SELECT ?1, ?2, ?3, ?3, 0, ?4 \
         WHERE ?1 IS NULL OR EXISTS (SELECT 1 FROM dining_tables WHERE id = ?1) \
         RETURNING id",
    )
    .bind(input.table)
    .bind(OrderStatus::Pending.code())
    .bind(now)
    .bind(input.is_takeaway)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(id)
}

async fn persist_total(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<Hundredths> {
    let total = sqlx::query_scalar::<_, i64>(
        "UPDATE orders SET total_price = ( \
             SELECT COALESCE(SUM(m.price * oi.quantity), 0) \
             FROM order_items oi JOIN menu_items m ON m.id = oi.menu_item_id \
             WHERE oi.order_id = ?1) \
         WHERE id = ?1 RETURNING total_price",
    )
    .bind(order_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(Hundredths::from_raw(total))
}

/// Subtract `quantity_required × line quantity` from every ingredient the
/// order's menu items use. Items without recipes touch nothing.
async fn decrement_stock(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<Vec<StockLevel>> {
    let levels = sqlx::query_as::<_, StockLevel>(
        r#"
        UPDATE ingredients
        SET current_stock = current_stock - (
            SELECT SUM(r.quantity_required * oi.quantity)
            FROM recipes r
            JOIN order_items oi ON oi.menu_item_id = r.menu_item_id
            WHERE oi.order_id = ?1 AND r.ingredient_id = ingredients.id
        )
        WHERE id IN (
            SELECT r.ingredient_id
            FROM recipes r
            JOIN order_items oi ON oi.menu_item_id = r.menu_item_id
            WHERE oi.order_id = ?1
        )
        RETURNING id, name, current_stock
        "#,
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(levels)
}

fn table_not_found(table: Option<i64>) -> AppError {
    let mut err = AppError::new(ErrorCode::TableNotFound);
    if let Some(id) = table {
        err = err.with_detail("table", id);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItemInput;

    fn line(menu_item: i64, quantity: i64) -> OrderItemInput {
        OrderItemInput {
            menu_item,
            quantity,
            special_requests: String::new(),
        }
    }

    fn order_with(items: Vec<OrderItemInput>) -> OrderCreate {
        OrderCreate {
            table: Some(1),
            is_takeaway: false,
            items,
        }
    }

    #[test]
    fn test_empty_order_rejected() {
        let err = validate_order(&order_with(vec![])).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_order(&order_with(vec![line(1, 1), line(2, MAX_LINE_QUANTITY)])).is_ok());

        let err = validate_order(&order_with(vec![line(1, 2), line(2, 0)])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        let fields = &details["fields"];
        assert!(fields.get("items[1].quantity").is_some());
        assert!(fields.get("items[0].quantity").is_none());

        assert!(validate_order(&order_with(vec![line(1, -3)])).is_err());
        assert!(validate_order(&order_with(vec![line(1, MAX_LINE_QUANTITY + 1)])).is_err());
    }

    #[test]
    fn test_special_request_length() {
        let mut long = line(1, 1);
        long.special_requests = "x".repeat(MAX_NOTE_LEN + 1);
        assert!(validate_order(&order_with(vec![long])).is_err());
    }

    #[test]
    fn test_table_not_found_carries_id() {
        let err = table_not_found(Some(42));
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(err.details.unwrap()["table"], 42);
        assert!(table_not_found(None).details.is_none());
    }
}
