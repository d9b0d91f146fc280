mod admin_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, Section};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "CS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".campus";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "registry.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_DEVICE_DIRECTORY: &str = "device";
