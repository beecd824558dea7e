//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use http::StatusCode;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery, Recipe, RecipeUpsert};
use shared::money::{Hundredths, MAX_UNIT_AMOUNT};

use crate::core::ServerState;
use crate::db::repository::{ingredient, menu_item};
use crate::utils::extract::JsonBody;
use crate::utils::validation::{
    FieldErrors, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_amount, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/menu - available items, optionally one category
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let Query(query) = query.map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, e.body_text())
            .with_detail("field", "category")
    })?;
    let items = menu_item::list_available(&state.pool, query.category).await?;
    Ok(Json(items))
}

/// POST /api/menu
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate_price(payload.price)?;

    let mut errors = FieldErrors::new();
    errors.check(validate_required_text(&payload.name, "name", MAX_NAME_LEN));
    errors.check(validate_optional_text(
        &payload.description,
        "description",
        MAX_DESCRIPTION_LEN,
    ));
    if payload.preparation_time < 0 {
        errors.add("preparation_time", "preparation_time must not be negative");
    }
    errors.finish()?;

    let item = menu_item::create(&state.pool, &payload).await?;
    tracing::info!(menu_item_id = item.id, name = %item.name, price = %item.price, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/{id} - partial update, including the availability toggle
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let mut errors = FieldErrors::new();
    if let Some(name) = &payload.name {
        errors.check(validate_required_text(name, "name", MAX_NAME_LEN));
    }
    if let Some(description) = &payload.description {
        errors.check(validate_optional_text(
            description,
            "description",
            MAX_DESCRIPTION_LEN,
        ));
    }
    if payload.preparation_time.is_some_and(|t| t < 0) {
        errors.add("preparation_time", "preparation_time must not be negative");
    }
    errors.finish()?;

    let item = menu_item::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| menu_item_not_found(id))?;
    Ok(Json(item))
}

/// GET /api/menu/{id}/recipe
pub async fn recipe(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Recipe>>> {
    if menu_item::find_by_id(&state.pool, id).await?.is_none() {
        return Err(menu_item_not_found(id));
    }
    let rows = menu_item::list_recipe(&state.pool, id).await?;
    Ok(Json(rows))
}

/// POST /api/recipes - create or replace one (menu item, ingredient) row
pub async fn upsert_recipe(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<RecipeUpsert>,
) -> AppResult<Json<Recipe>> {
    validate_amount(
        payload.quantity_required,
        "quantity_required",
        MAX_UNIT_AMOUNT,
        ErrorCode::RecipeInvalidQuantity,
    )?;
    if menu_item::find_by_id(&state.pool, payload.menu_item).await?.is_none() {
        return Err(menu_item_not_found(payload.menu_item));
    }
    if ingredient::find_by_id(&state.pool, payload.ingredient).await?.is_none() {
        return Err(AppError::with_message(
            ErrorCode::IngredientNotFound,
            format!("Ingredient {} not found", payload.ingredient),
        ));
    }

    let recipe = menu_item::upsert_recipe(&state.pool, &payload).await?;
    Ok(Json(recipe))
}

fn validate_price(price: Hundredths) -> AppResult<()> {
    validate_amount(price, "price", MAX_UNIT_AMOUNT, ErrorCode::MenuItemInvalidPrice)
}

fn menu_item_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
        .with_detail("menu_item", id)
}
