mod api_config;
mod config;
mod database_config;
mod error;
mod external_config;
mod log_level;
mod logging_config;
mod retry_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use external_config::ExternalConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".um";
const CONFIG_FILE_NAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

// API
const DEFAULT_USER_LIMIT: i64 = 100;
const DEFAULT_MAX_USER_LIMIT: i64 = 10_000;

// External
const DEFAULT_EXTERNAL_TIMEOUT_SECS: u64 = 30;
const MIN_EXTERNAL_TIMEOUT_SECS: u64 = 1;
const MAX_EXTERNAL_TIMEOUT_SECS: u64 = 300;
