//! Authentication endpoints: register, login, logout

use axum::http::StatusCode;
use axum::{Extension, Json, extract::State};
use serde_json::{Value, json};

use crate::auth::CurrentToken;
use crate::db;
use crate::error::AppError;
use crate::models::Role;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

use super::{ApiResult, missing_fields, require_str};

/// POST /register
///
/// `role` is optional and defaults to Customer; unknown role names are
/// rejected rather than stored.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let missing = missing_fields(&body, &["username", "email", "password"]);
    if !missing.is_empty() {
        return Err(
            AppError::validation("These fields are required:").with_details(json!(missing))
        );
    }

    let username = require_str(&body, "username")?;
    let email = require_str(&body, "email")?;
    let password = require_str(&body, "password")?;

    let role = match body.get("role") {
        None | Some(Value::Null) => Role::Customer,
        Some(Value::String(s)) if s.is_empty() => Role::Customer,
        Some(_) => {
            let raw = require_str(&body, "role")?;
            raw.parse::<Role>()
                .map_err(|e| AppError::validation(e.to_string()))?
        }
    };

    if db::users::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::conflict("Email already exists"));
    }
    if db::users::find_by_username(&state.pool, username)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Username already exists"));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user_id = db::users::create(&state.pool, username, email, &password_hash, role).await?;

    tracing::info!(user_id, username = %username, role = %role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// POST /login
///
/// The request contract demands `username` and `role` alongside the
/// credentials, even though the lookup uses only email and password.
pub async fn login(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult<Value> {
    let missing = missing_fields(&body, &["username", "email", "password", "role"]);
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "These fields are required: {}",
            missing.join(", ")
        )));
    }

    let email = require_str(&body, "email")?;
    let password = require_str(&body, "password")?;

    let user = match db::users::find_by_email(&state.pool, email).await? {
        Some(user) if verify_password(password, &user.password_hash) => user,
        _ => {
            tracing::warn!(email = %email, "login failed - invalid credentials");
            return Err(AppError::auth("Invalid email or password"));
        }
    };

    let token = state.jwt.generate_token(user.id).map_err(|e| {
        tracing::error!(error = %e, "token generation failed");
        AppError::internal("Token generation failed")
    })?;

    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "user logged in");

    Ok(Json(json!({
        "message": "Login successful",
        "access_token": token,
        "username": user.username,
        "role": user.role,
    })))
}

/// POST /logout
///
/// The gate has already validated the token, so revocation is a plain
/// registry insert; re-revoking a known jti is a no-op.
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
) -> ApiResult<Value> {
    state.revoked.add(&token.jti);

    tracing::info!(user_id = token.user_id, jti = %token.jti, "user logged out");

    Ok(Json(json!({ "message": "Logged out successfully" })))
}
