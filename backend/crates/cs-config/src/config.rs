use crate::{
    AdminConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RetryConfig, Section, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub admin: AdminConfig,
    pub client: ClientConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Defaults, then `config.toml` from the config dir (created if
    /// missing), then `CS_*` environment overrides.
    ///
    /// The result is not validated; callers run `validate()` themselves.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `$CS_CONFIG_DIR`, falling back to `./.campus`.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|_| {
            ConfigError::invalid(Section::Environment, "cannot determine current working directory")
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Checks every section. Paths must stay inside the config dir.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.validation.validate()?;
        self.admin.validate()?;
        self.client.validate()?;
        self.retry.validate()?;

        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::invalid(
                Section::Database,
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Registry database file, resolved against the config dir.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Where a device keeps its identity token and cached profile.
    pub fn device_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.data_dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Effective settings at info level. The admin token is reported only as
    /// enabled or disabled.
    pub fn log_summary(&self) {
        info!("Effective configuration:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: name<={}, class<={}",
            self.validation.max_name_length, self.validation.max_class_length
        );
        info!(
            "  admin: {}",
            if self.admin.is_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  client: {} (read {}s, write {}s, data_dir={})",
            self.client.base_url,
            self.client.read_timeout_secs,
            self.client.write_timeout_secs,
            self.client.data_dir
        );
        info!(
            "  retry: attempts={}, base={}ms",
            self.retry.max_attempts, self.retry.base_delay_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CS_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("CS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CS_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "CS_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "CS_VALIDATION_MAX_CLASS_LENGTH",
            &mut self.validation.max_class_length,
        );

        // Admin
        Self::apply_env_option_string("CS_ADMIN_TOKEN", &mut self.admin.token);

        // Client
        Self::apply_env_string("CS_CLIENT_BASE_URL", &mut self.client.base_url);
        Self::apply_env_parse(
            "CS_CLIENT_READ_TIMEOUT_SECS",
            &mut self.client.read_timeout_secs,
        );
        Self::apply_env_parse(
            "CS_CLIENT_WRITE_TIMEOUT_SECS",
            &mut self.client.write_timeout_secs,
        );
        Self::apply_env_string("CS_CLIENT_DATA_DIR", &mut self.client.data_dir);

        // Retry
        Self::apply_env_parse("CS_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse("CS_RETRY_BASE_DELAY_MS", &mut self.retry.base_delay_ms);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// `true` and `1` enable; anything else disables.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the current setting in place.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// An empty value unsets the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = (!val.is_empty()).then_some(val);
        }
    }
}
