//! Dining Table API

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/api/tables", get(handler::list))
        .route("/api/tables/availability", post(handler::availability));

    let manage_routes = Router::new()
        .route("/api/tables", post(handler::create))
        .route("/api/tables/{id}/status", put(handler::update_status))
        .layer(middleware::from_fn(require_capability(
            Capability::ManageTables,
        )));

    public_routes.merge(manage_routes)
}
