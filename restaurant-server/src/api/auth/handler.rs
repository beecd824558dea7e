//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{CurrentUserInfo, LoginRequest, LoginResponse};

use crate::auth::CurrentUser;
use crate::auth::password::verify_password;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::security_log;
use crate::utils::AppResult;
use crate::utils::extract::JsonBody;
use crate::utils::{AppError, ErrorCode};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/token - exchange username and password for a bearer token
pub async fn login(
    State(state): State<ServerState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = staff::find_account_by_username(&state.pool, &req.username).await?;

    // Fixed delay before inspecting the result so unknown users and wrong
    // passwords take the same time
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Same error for unknown user and wrong password
    let account = match account {
        Some(account) if verify_password(&req.password, &account.password_hash) => account,
        Some(_) | None => {
            security_log!(
                "WARN",
                "login_failed",
                username = req.username.clone()
            );
            return Err(AppError::invalid_credentials());
        }
    };

    if !account.is_active {
        security_log!("WARN", "login_disabled", username = account.username.clone());
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let token = state
        .get_jwt_service()
        .generate_token(account.id, &account.username, account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = account.id,
        username = %account.username,
        role = account.role.map(|r| r.as_str()).unwrap_or("none"),
        "User logged in"
    );

    Ok(Json(LoginResponse {
        token,
        user_id: account.id,
        role: account.role,
    }))
}

/// GET /api/auth/me - identity and capabilities of the caller
pub async fn me(user: CurrentUser) -> Json<CurrentUserInfo> {
    let capabilities = user
        .capabilities()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();

    Json(CurrentUserInfo {
        user_id: user.id,
        username: user.username,
        role: user.role,
        capabilities,
    })
}
