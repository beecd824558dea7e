//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{
    AvailabilityQuery, AvailabilityResponse, DiningTable, DiningTableCreate, TableStatusUpdate,
};

use crate::core::ServerState;
use crate::db::repository::{RepoError, dining_table};
use crate::utils::extract::JsonBody;
use crate::utils::time::{RESERVATION_WINDOW_MILLIS, parse_local_minute};
use crate::utils::validation::{
    FieldErrors, MAX_LOCATION_LEN, MAX_TABLE_NUMBER_LEN, validate_optional_text,
    validate_range, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Largest seat count a table may declare
const MAX_CAPACITY: i64 = 100;

/// GET /api/tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.pool).await?;
    Ok(Json(tables))
}

/// POST /api/tables/availability - advisory search, writes nothing
pub async fn availability(
    State(state): State<ServerState>,
    JsonBody(query): JsonBody<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    validate_range(query.party_size, "party_size", 1, MAX_CAPACITY)?;
    let start = parse_local_minute(&query.start_time, "start_time", state.config.business_timezone)?;

    let available_tables = dining_table::find_available(
        &state.pool,
        query.party_size,
        start,
        start + RESERVATION_WINDOW_MILLIS,
    )
    .await?;
    Ok(Json(AvailabilityResponse { available_tables }))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    let mut errors = FieldErrors::new();
    errors.check(validate_required_text(
        payload.number.trim(),
        "number",
        MAX_TABLE_NUMBER_LEN,
    ));
    errors.check(validate_range(payload.capacity, "capacity", 1, MAX_CAPACITY));
    errors.check(validate_optional_text(
        &payload.location,
        "location",
        MAX_LOCATION_LEN,
    ));
    errors.finish()?;

    let table = dining_table::create(&state.pool, &payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::with_message(
                ErrorCode::TableNumberExists,
                format!("Table number {} already exists", payload.number.trim()),
            )
            .with_detail("field", "number"),
            other => other.into(),
        })?;

    tracing::info!(table_id = table.id, number = %table.number, capacity = table.capacity, "Table created");
    Ok((StatusCode::CREATED, Json(table)))
}

/// PUT /api/tables/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<TableStatusUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::update_status(&state.pool, id, payload.status)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::TableNotFound, format!("Table {id} not found"))
        })?;
    tracing::info!(table_id = id, status = table.status.code(), "Table status updated");
    Ok(Json(table))
}
