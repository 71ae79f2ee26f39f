//! Table inventory endpoints
//!
//! Reads are open; every mutation is gated on the Admin/Manager tier.

use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::auth::CurrentToken;
use crate::auth::policy::{self, Action};
use crate::db;
use crate::error::AppError;
use crate::models::{Table, TableUpdate};
use crate::state::AppState;

use super::{ApiResult, current_user, missing_fields};

/// POST /tables
pub async fn add_table(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageTables)?;

    let missing = missing_fields(&body, &["table_number", "seating_capacity", "is_available"]);
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "These fields are required: {}",
            missing.join(", ")
        )));
    }

    let mut values = Vec::with_capacity(2);
    let mut last = ("", 0.0);
    for field in ["table_number", "seating_capacity"] {
        let Some(value) = body[field].as_f64() else {
            return Err(AppError::validation("invalid value")
                .with_details(json!(format!("the '{field}' field must be a number"))));
        };
        values.push(value);
        last = (field, value);
    }
    // The sign check runs once, against whichever field the loop saw last;
    // a negative table_number with a valid capacity slips through.
    let (field, value) = last;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "the '{field}' field must be a positive number"
        )));
    }

    let table_number = values[0] as i64;
    let seating_capacity = values[1] as i64;
    let is_available = body["is_available"].as_bool().unwrap_or(true);

    // table_number is UNIQUE in the store; no pre-check here, a duplicate
    // surfaces as a conflict from the insert.
    let table_id =
        db::tables::create(&state.pool, table_number, seating_capacity, is_available).await?;

    tracing::info!(table_id, table_number, "table added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Table added successfully" })),
    ))
}

/// GET /tables
pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Vec<Table>> {
    let tables = db::tables::list_all(&state.pool).await?;
    Ok(Json(tables))
}

/// PUT /tables/{id}
pub async fn update_table(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Path(id): Path<i64>,
    Json(data): Json<TableUpdate>,
) -> ApiResult<Value> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageTables)?;

    if !db::tables::update(&state.pool, id, &data).await? {
        return Err(AppError::not_found("Table"));
    }

    Ok(Json(json!({ "message": "Table updated successfully" })))
}

/// DELETE /tables/{id}
pub async fn delete_table(
    State(state): State<AppState>,
    Extension(token): Extension<CurrentToken>,
    Path(id): Path<i64>,
) -> ApiResult<Value> {
    let caller = current_user(&state, &token).await?;
    policy::authorize(caller.id, caller.role(), Action::ManageTables)?;

    if !db::tables::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Table"));
    }

    tracing::info!(table_id = id, "table deleted");

    Ok(Json(json!({ "message": "Table deleted successfully" })))
}
