//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{OrderCreate, OrderDetail, OrderStatusUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, order};
use crate::orders::{place_order, update_status as apply_status};
use crate::utils::extract::JsonBody;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/orders - place an order, returns it with lines and total
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    JsonBody(payload): JsonBody<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderDetail>)> {
    let detail = place_order(&state.pool, &payload).await?;
    tracing::debug!(order_id = detail.order.id, user_id = user.id, "Order accepted");
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let mut conn = state.pool.acquire().await.map_err(RepoError::from)?;
    let detail = order::load_detail(&mut conn, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
    })?;
    Ok(Json(detail))
}

/// PATCH|PUT /api/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<OrderStatusUpdate>,
) -> AppResult<Json<OrderDetail>> {
    let detail = apply_status(&state.pool, id, payload.status).await?;
    tracing::debug!(order_id = id, user_id = user.id, "Order status changed by user");
    Ok(Json(detail))
}
