//! Reservation API
//!
//! Booking is public: guests reserve without an account.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reservations", post(handler::create))
}
