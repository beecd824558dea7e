//! Staff API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{StaffCreate, StaffMember};

use crate::auth::CurrentUser;
use crate::auth::password::hash_password;
use crate::core::ServerState;
use crate::db::repository::staff::{self, NewStaff};
use crate::db::repository::RepoError;
use crate::utils::extract::JsonBody;
use crate::utils::validation::{
    FieldErrors, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, validate_pin, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Shortest password accepted for a new account
const MIN_PASSWORD_LEN: usize = 8;

/// POST /api/staff - create an account with its staff profile
pub async fn create(
    State(state): State<ServerState>,
    admin: CurrentUser,
    JsonBody(payload): JsonBody<StaffCreate>,
) -> AppResult<(StatusCode, Json<StaffMember>)> {
    let mut errors = FieldErrors::new();
    errors.check(validate_required_text(
        payload.username.trim(),
        "username",
        MAX_USERNAME_LEN,
    ));
    errors.check(validate_required_text(
        &payload.password,
        "password",
        MAX_PASSWORD_LEN,
    ));
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    errors.finish()?;
    validate_pin(&payload.pin_code)?;

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    let username = payload.username.trim().to_string();

    let member = staff::create(
        &state.pool,
        &NewStaff {
            username: username.clone(),
            password_hash,
            role: payload.role,
            pin_code: payload.pin_code,
        },
    )
    .await
    .map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::UsernameExists,
            format!("Username {username} is taken"),
        )
        .with_detail("field", "username"),
        other => other.into(),
    })?;

    tracing::info!(
        user_id = member.user_id,
        username = %member.username,
        role = member.role.as_str(),
        created_by = admin.id,
        "Staff account created"
    );
    Ok((StatusCode::CREATED, Json(member)))
}
