//! Staff API

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/staff", post(handler::create))
        .layer(middleware::from_fn(require_capability(Capability::ManageStaff)))
}
