//! Dish (menu) endpoints
//!
//! Reads are open; every mutation is gated on the Admin/Manager tier.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::auth::CurrentToken;
use crate::auth::policy::{self, Action};
use crate::db;
use crate::error::AppError;
use crate::models::{Dish, DishUpdate};
use crate::state::AppState;

use super::{ApiResult, current_user, missing_fields, require_str};

/// POST /dishes
pub async fn add_dish(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageDishes)?;

    let missing = missing_fields(&body, &["name", "description", "price"]);
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "These fields are required: {}",
            missing.join(", ")
        )));
    }

    let name = require_str(&body, "name")?;
    let description = require_str(&body, "description")?;

    // A non-numeric price answers 200 with an error body; only a negative
    // numeric price gets the 400.
    let Some(price) = body["price"].as_f64() else {
        let body = json!({
            "error": "invalid value",
            "details": "the 'price' field must be a number",
        });
        return Ok((StatusCode::OK, Json(body)).into_response());
    };
    if price < 0.0 {
        return Err(AppError::validation("price must be a positive number"));
    }

    let dish_id = db::dishes::create(&state.pool, name, description, price).await?;

    tracing::info!(dish_id, name = %name, "dish added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Dish added successfully" })),
    )
        .into_response())
}

/// GET /dishes
pub async fn list_dishes(State(state): State<AppState>) -> ApiResult<Vec<Dish>> {
    let dishes = db::dishes::list_all(&state.pool).await?;
    Ok(Json(dishes))
}

/// GET /dishes/{id}
pub async fn get_dish(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Dish> {
    let dish = db::dishes::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Dish"))?;
    Ok(Json(dish))
}

/// PUT /dishes/{id}
pub async fn update_dish(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Path(id): Path<i64>,
    Json(data): Json<DishUpdate>,
) -> ApiResult<Value> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageDishes)?;

    if !db::dishes::update(&state.pool, id, &data).await? {
        return Err(AppError::not_found("Dish"));
    }

    Ok(Json(json!({ "message": "Dish updated successfully" })))
}

/// DELETE /dishes/{id}
pub async fn delete_dish(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Path(id): Path<i64>,
) -> ApiResult<Value> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageDishes)?;

    if !db::dishes::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Dish"));
    }

    tracing::info!(dish_id = id, "dish deleted");

    Ok(Json(json!({ "message": "Dish deleted successfully" })))
}
