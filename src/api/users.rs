//! User profile endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::auth::CurrentToken;
use crate::auth::policy::{self, Action};
use crate::db;
use crate::error::AppError;
use crate::models::UserProfile;
use crate::state::AppState;

use super::{ApiResult, current_user};

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Path(id): Path<i64>,
) -> ApiResult<UserProfile> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ViewUser { target_id: id })?;

    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok(Json(UserProfile::from(user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
) -> ApiResult<Value> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ListUsers)?;

    let users: Vec<UserProfile> = db::users::list_all(&state.pool)
        .await?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    Ok(Json(json!({ "users": users })))
}
