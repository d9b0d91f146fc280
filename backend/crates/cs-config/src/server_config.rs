use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT, Section};

use serde::Deserialize;

/// Listen address of the name registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick; anything else must be unprivileged.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid(Section::Server, "host is blank"));
        }

        match self.port {
            0 => Ok(()),
            port if port < MIN_PORT => Err(ConfigError::invalid(
                Section::Server,
                format!("port {} is privileged; use 0 or {}+", port, MIN_PORT),
            )),
            _ => Ok(()),
        }
    }
}
