//! Role-based authorization policy
//!
//! A single decision point consulted by every protected handler, instead of
//! per-endpoint role checks. Unauthenticated reads (menu, tables) never
//! reach the policy.

use serde_json::json;

use crate::error::AppError;
use crate::models::Role;

/// Protected actions gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// View a single user profile. Owners may always view their own;
    /// staff may view anyone's.
    ViewUser { target_id: i64 },
    /// List every user account.
    ListUsers,
    /// Create, update, or delete dishes.
    ManageDishes,
    /// Create, update, or delete tables.
    ManageTables,
}

/// Check whether the calling user may perform `action`.
pub fn authorize(user_id: i64, role: Role, action: Action) -> Result<(), AppError> {
    let allowed = match action {
        Action::ViewUser { target_id } => target_id == user_id || role.is_staff(),
        Action::ListUsers => role == Role::Admin,
        Action::ManageDishes | Action::ManageTables => role.is_staff(),
    };

    if allowed {
        return Ok(());
    }

    // The user listing denial echoes the caller's role.
    match action {
        Action::ListUsers => Err(AppError::forbidden("Unauthorized. Admin access required")
            .with_details(json!({ "current_role": role.as_str() }))),
        _ => Err(AppError::forbidden("Unauthorized")),
    }
}
