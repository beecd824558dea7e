//! Order status state machine
//!
//! Transition rules live on [`OrderStatus::can_transition_to`]; this module
//! applies them to stored orders with a compare-and-set update.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderDetail, OrderStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, order};

/// Statuses from which `next` may be reached
pub fn allowed_sources(next: OrderStatus) -> Vec<OrderStatus> {
    OrderStatus::ALL
        .into_iter()
        .filter(|from| from.can_transition_to(next))
        .collect()
}

/// Move an order to `next`, bumping `updated_at`.
///
/// Fails with `OrderNotFound` for unknown ids and `InvalidStatusTransition`
/// (422) when the current status does not allow the move. The update and the
/// returned snapshot share one transaction, so the response always shows the
/// status this call wrote.
pub async fn update_status(pool: &SqlitePool, id: i64, next: OrderStatus) -> AppResult<OrderDetail> {
    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    let changed =
        order::update_status_from(&mut *tx, id, next, &allowed_sources(next), now_millis())
            .await?;

    let detail = order::load_detail(&mut tx, id)
        .await?
        .ok_or_else(|| order_not_found(id))?;

    if !changed {
        let current = detail.order.status;
        tracing::debug!(order_id = id, from = current.code(), to = next.code(), "Status change rejected");
        return Err(AppError::business_rule(
            ErrorCode::InvalidStatusTransition,
            format!("Cannot change order status from {} to {}", current.code(), next.code()),
        )
        .with_detail("from", current.code())
        .with_detail("to", next.code()));
    }

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(order_id = id, status = next.code(), "Order status updated");
    Ok(detail)
}

fn order_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
        .with_detail("order_id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn test_allowed_sources() {
        assert_eq!(allowed_sources(Cooking), vec![Pending]);
        assert_eq!(allowed_sources(Ready), vec![Cooking]);
        assert_eq!(allowed_sources(Served), vec![Ready]);
        assert_eq!(allowed_sources(Cancelled), vec![Pending, Cooking, Ready, Served]);
        assert!(allowed_sources(Pending).is_empty());
    }

    #[test]
    fn test_order_not_found_is_404() {
        let err = order_not_found(9);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }
}
