//! API routes

pub mod auth;
pub mod dishes;
pub mod health;
pub mod tables;
pub mod users;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::auth::CurrentToken;
use crate::auth::middleware::require_auth;
use crate::db;
use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Handler result alias: JSON payload or error response.
pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    // Open endpoints: registration, login, menu and table reads
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/dishes", get(dishes::list_dishes))
        .route("/dishes/{id}", get(dishes::get_dish))
        .route("/tables", get(tables::list_tables));

    // Everything else requires a valid, non-revoked token
    let protected = Router::new()
        .route("/logout", post(auth::logout))
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
        .route("/dishes", post(dishes::add_dish))
        .route(
            "/dishes/{id}",
            put(dishes::update_dish).delete(dishes::delete_dish),
        )
        .route("/tables", post(tables::add_table))
        .route(
            "/tables/{id}",
            put(tables::update_table).delete(tables::delete_table),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the calling token's user record.
///
/// A valid token whose user row no longer exists is treated as an
/// unauthorized identity.
pub(crate) async fn current_user(
    state: &AppState,
    token: &CurrentToken,
) -> Result<User, AppError> {
    db::users::find_by_id(&state.pool, token.user_id)
        .await?
        .ok_or_else(|| AppError::forbidden("Unauthorized"))
}

/// Collect required fields that are absent, null, or empty strings.
///
/// `false` and `0` count as present; only a missing key, an explicit null,
/// or an empty string fails the presence check.
pub(crate) fn missing_fields(body: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| match body.get(**field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .map(|field| field.to_string())
        .collect()
}

/// Require a field to hold a JSON string.
pub(crate) fn require_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, AppError> {
    body.get(field).and_then(Value::as_str).ok_or_else(|| {
        AppError::validation("invalid value")
            .with_details(json!(format!("the '{field}' field must be a string")))
    })
}
