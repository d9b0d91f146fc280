use crate::{ConfigError, ConfigErrorResult, Section};

use serde::Deserialize;

pub const MIN_ADMIN_TOKEN_LENGTH: usize = 16;

/// Administrative override endpoints (release a binding, change a role).
///
/// With no token configured the endpoints refuse every request.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AdminConfig {
    pub token: Option<String>,
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref token) = self.token
            && token.len() < MIN_ADMIN_TOKEN_LENGTH
        {
            return Err(ConfigError::invalid(
                Section::Admin,
                format!(
                    "admin.token must be at least {} characters",
                    MIN_ADMIN_TOKEN_LENGTH
                ),
            ));
        }

        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }
}
