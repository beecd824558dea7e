//! Inventory API

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/api/inventory", get(handler::list))
        .route("/api/inventory/low-stock", get(handler::low_stock));

    let manage_routes = Router::new()
        .route("/api/inventory", post(handler::create))
        .route("/api/inventory/{id}/restock", post(handler::restock))
        .layer(middleware::from_fn(require_capability(
            Capability::ManageInventory,
        )));

    public_routes.merge(manage_routes)
}
