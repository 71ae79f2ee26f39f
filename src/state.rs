//! Shared application state

use sqlx::SqlitePool;

use crate::auth::{JwtService, RevocationList};
use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Session token service
    pub jwt: JwtService,
    /// Revoked token identifiers (populated by logout)
    pub revoked: RevocationList,
}

impl AppState {
    /// Connect to the store, create missing tables, and assemble state.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;
        db::init_schema(&pool).await?;

        Ok(Self {
            pool,
            jwt: JwtService::new(&config.jwt_secret, config.token_expiry_secs),
            revoked: RevocationList::new(),
        })
    }
}
