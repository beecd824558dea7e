//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{Ingredient, IngredientCreate, RestockRequest};
use shared::money::MAX_LEDGER_AMOUNT;

use crate::core::ServerState;
use crate::db::repository::{RepoError, ingredient};
use crate::utils::extract::JsonBody;
use crate::utils::validation::{
    FieldErrors, MAX_NAME_LEN, MAX_UNIT_LEN, validate_amount, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/inventory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Ingredient>>> {
    let rows = ingredient::find_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/inventory/low-stock - ingredients below their alert threshold
pub async fn low_stock(State(state): State<ServerState>) -> AppResult<Json<Vec<Ingredient>>> {
    let rows = ingredient::find_low_stock(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/inventory
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<IngredientCreate>,
) -> AppResult<(StatusCode, Json<Ingredient>)> {
    let mut errors = FieldErrors::new();
    errors.check(validate_required_text(&payload.name, "name", MAX_NAME_LEN));
    errors.check(validate_required_text(&payload.unit, "unit", MAX_UNIT_LEN));
    errors.check(validate_optional_text(&payload.supplier, "supplier", MAX_NAME_LEN));
    for (value, field) in [
        (payload.current_stock, "current_stock"),
        (payload.alert_threshold, "alert_threshold"),
    ] {
        errors.check(validate_amount(
            value,
            field,
            MAX_LEDGER_AMOUNT,
            ErrorCode::ValueOutOfRange,
        ));
    }
    errors.finish()?;

    let created = ingredient::create(&state.pool, &payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::with_message(
                ErrorCode::IngredientNameExists,
                format!("Ingredient {} already exists", payload.name.trim()),
            )
            .with_detail("field", "name"),
            other => other.into(),
        })?;

    tracing::info!(ingredient_id = created.id, name = %created.name, "Ingredient created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/inventory/{id}/restock - add to the current level
pub async fn restock(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<RestockRequest>,
) -> AppResult<Json<Ingredient>> {
    if payload.quantity.raw() <= 0 {
        return Err(AppError::field(
            ErrorCode::ValueOutOfRange,
            "quantity",
            "quantity must be greater than zero",
        ));
    }
    validate_amount(
        payload.quantity,
        "quantity",
        MAX_LEDGER_AMOUNT,
        ErrorCode::ValueOutOfRange,
    )?;

    // The stock column is range-checked, so an overflowing sum is rejected.
    let updated = ingredient::restock(&state.pool, id, payload.quantity)
        .await
        .map_err(|e| match e {
            RepoError::Validation(_) => AppError::field(
                ErrorCode::ValueOutOfRange,
                "quantity",
                format!("stock would exceed {MAX_LEDGER_AMOUNT}"),
            ),
            other => other.into(),
        })?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::IngredientNotFound,
                format!("Ingredient {id} not found"),
            )
        })?;

    tracing::info!(
        ingredient_id = id,
        added = %payload.quantity,
        stock = %updated.current_stock,
        "Ingredient restocked"
    );
    Ok(Json(updated))
}
