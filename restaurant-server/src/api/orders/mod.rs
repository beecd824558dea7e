//! Order API
//!
//! | Path | Method | Capability |
//! |------|--------|------------|
//! | /api/orders | POST | PlaceOrder |
//! | /api/orders/{id} | GET | ViewOrders |
//! | /api/orders/{id}/status | PATCH, PUT | UpdateOrderStatus |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let place_routes = Router::new()
        .route("/api/orders", post(handler::create))
        .layer(middleware::from_fn(require_capability(Capability::PlaceOrder)));

    let view_routes = Router::new()
        .route("/api/orders/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_capability(Capability::ViewOrders)));

    let status_routes = Router::new()
        .route(
            "/api/orders/{id}/status",
            patch(handler::update_status).put(handler::update_status),
        )
        .layer(middleware::from_fn(require_capability(
            Capability::UpdateOrderStatus,
        )));

    place_routes.merge(view_routes).merge(status_routes)
}
