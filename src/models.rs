//! Domain records and API payloads

use serde::{Deserialize, Serialize};

/// Access tier attached to a user account.
///
/// Parsed case-insensitively at the boundary and stored in its canonical
/// spelling, so no case-folding happens anywhere past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Customer => "Customer",
        }
    }

    /// Admin and Manager hold the administrative tier: they manage dishes
    /// and tables and may view any user profile.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "customer" => Ok(Role::Customer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// User account row. The password is only ever stored hashed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    /// Parse the stored role. Rows are only ever written with canonical
    /// spellings; anything unreadable degrades to the lowest tier.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::Customer)
    }
}

/// User payload exposed over the API (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Menu item.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Partial update payload for a dish; omitted fields keep stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Dining table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Table {
    pub id: i64,
    pub table_number: i64,
    pub seating_capacity: i64,
    pub is_available: bool,
}

/// Partial update payload for a table; omitted fields keep stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct TableUpdate {
    pub table_number: Option<i64>,
    pub seating_capacity: Option<i64>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(" customer ".parse::<Role>().unwrap(), Role::Customer);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "superadmin".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role: superadmin");
    }

    #[test]
    fn role_round_trips_through_canonical_spelling() {
        for role in [Role::Admin, Role::Manager, Role::Customer] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn staff_tier_excludes_customers() {
        assert!(Role::Admin.is_staff());
        assert!(Role::Manager.is_staff());
        assert!(!Role::Customer.is_staff());
    }

    #[test]
    fn profile_drops_password_hash() {
        let user = User {
            id: 7,
            username: "maria".into(),
            email: "maria@example.com".into(),
            password_hash: "$argon2id$...".into(),
            role: "Manager".into(),
        };
        let profile = UserProfile::from(user);
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["role"], "Manager");
    }
}
