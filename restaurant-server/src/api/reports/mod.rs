//! Reporting API

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reports/daily-sales", get(handler::daily_sales))
        .layer(middleware::from_fn(require_capability(
            Capability::ViewSalesReport,
        )))
}
