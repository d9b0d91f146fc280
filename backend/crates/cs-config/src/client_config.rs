use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_DEVICE_DIRECTORY, Section,
};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;

/// Device-side settings for the identity client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Registry API root, including the `/api` prefix
    pub base_url: String,
    /// Timeout for check-name and resolve calls
    pub read_timeout_secs: u64,
    /// Timeout for bind calls
    pub write_timeout_secs: u64,
    /// Device state directory, relative to the config directory
    pub data_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            write_timeout_secs: DEFAULT_WRITE_TIMEOUT_SECS,
            data_dir: String::from(DEFAULT_DEVICE_DIRECTORY),
        }
    }
}

impl ClientConfig {
    /// Points the client at another registry, as `--server` does. The URL
    /// gets the same checks as one read from config.toml; on error the
    /// current URL is left in place.
    pub fn override_base_url(&mut self, base_url: String) -> ConfigErrorResult<()> {
        let candidate = Self {
            base_url,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                Section::Client,
                format!(
                    "client.base_url must start with http:// or https://, got {}",
                    self.base_url
                ),
            ));
        }

        for (field, value) in [
            ("read_timeout_secs", self.read_timeout_secs),
            ("write_timeout_secs", self.write_timeout_secs),
        ] {
            if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&value) {
                return Err(ConfigError::invalid(
                    Section::Client,
                    format!(
                        "client.{} must be {}-{}, got {}",
                        field, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, value
                    ),
                ));
            }
        }

        let data_dir = std::path::Path::new(&self.data_dir);
        if self.data_dir.is_empty() || data_dir.is_absolute() || self.data_dir.contains("..") {
            return Err(ConfigError::invalid(
                Section::Client,
                "client.data_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}
