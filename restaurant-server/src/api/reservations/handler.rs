//! Reservation API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{Reservation, ReservationCreate};

use crate::core::ServerState;
use crate::reservations::{create_reservation, validate_reservation};
use crate::utils::AppResult;
use crate::utils::extract::JsonBody;

/// POST /api/reservations - book a table and mark it Reserved
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let data = validate_reservation(&payload, state.config.business_timezone)?;
    let reservation = create_reservation(
        &state.pool,
        &data,
        state.config.enforce_reservation_availability,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}
