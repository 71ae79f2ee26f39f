//! Request authentication middleware
//!
//! Validates the bearer token on every protected route and injects the
//! authenticated token context into request extensions. Runs before any
//! handler logic: missing, malformed, expired, and revoked tokens are all
//! rejected here with 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::jwt::{JwtError, JwtService};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated token context available to protected handlers.
#[derive(Debug, Clone)]
pub struct CurrentToken {
    /// Subject user id carried by the token
    pub user_id: i64,
    /// Token identifier, the key revoked at logout
    pub jti: String,
}

/// Middleware that gates protected routes on a valid, non-revoked token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::auth("Missing Authorization header"))?;

    let token = JwtService::extract_from_header(auth_header)
        .ok_or_else(|| AppError::auth("Invalid Authorization format"))?;

    let claims = state.jwt.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, uri = %request.uri(), "token validation failed");
        match e {
            JwtError::ExpiredToken => AppError::auth("Token expired"),
            _ => AppError::auth("Invalid token"),
        }
    })?;

    if state.revoked.contains(&claims.jti) {
        tracing::warn!(jti = %claims.jti, "revoked token presented");
        return Err(AppError::auth("Token has been revoked"));
    }

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::auth("Invalid token"))?;

    request.extensions_mut().insert(CurrentToken {
        user_id,
        jti: claims.jti,
    });

    Ok(next.run(request).await)
}
