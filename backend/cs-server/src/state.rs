use cs_config::{AdminConfig, Config, ValidationConfig};

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validation: ValidationConfig,
    pub admin: AdminConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            validation: config.validation.clone(),
            admin: config.admin.clone(),
        }
    }
}
