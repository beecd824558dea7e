//! Authentication Routes

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// - /api/auth/token: public
/// - /api/auth/me: any valid token (the extractor rejects anonymous callers)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/token", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}
