//! Authentication middleware
//!
//! [`authenticate`] runs on every request. It resolves a bearer token into a
//! [`CurrentUser`] request extension and leaves anonymous requests alone, so
//! public routes keep working without a token. Protected routes add a
//! [`require_capability`] layer which rejects anonymous callers with 401 and
//! callers lacking the capability with 403.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{Capability, CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Resolve `Authorization: Bearer <token>` into a [`CurrentUser`].
///
/// | Situation | Result |
/// |-----------|--------|
/// | no Authorization header | request continues anonymously |
/// | malformed header | 401 TokenInvalid |
/// | expired token | 401 TokenExpired |
/// | invalid token | 401 TokenInvalid |
pub async fn authenticate(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight never carries credentials
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let Some(header) = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(next.run(req).await);
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    let user = resolve_user(&state.get_jwt_service(), token, &req.uri().to_string())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Validate a token and build the caller identity, logging failures
pub(crate) fn resolve_user(
    jwt_service: &JwtService,
    token: &str,
    uri: &str,
) -> Result<CurrentUser, AppError> {
    let claims = jwt_service.validate_token(token).map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = e.to_string(),
            uri = uri.to_string()
        );
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    CurrentUser::try_from(claims)
        .map_err(|e| AppError::invalid_token(format!("Malformed token claims: {e}")))
}

/// Capability check middleware
///
/// ```ignore
/// Router::new()
///     .route("/", post(handler::create))
///     .layer(middleware::from_fn(require_capability(Capability::ManageCatalog)));
/// ```
pub fn require_capability(
    capability: Capability,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let Some(user) = req.extensions().get::<CurrentUser>() else {
                security_log!(
                    "WARN",
                    "auth_missing",
                    uri = req.uri().to_string(),
                    required_capability = capability.as_str()
                );
                return Err(AppError::unauthorized());
            };

            if !user.has(capability) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    user_id = user.id,
                    username = user.username.clone(),
                    required_capability = capability.as_str()
                );
                return Err(AppError::forbidden(format!(
                    "Permission denied: {}",
                    capability.as_str()
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
