use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, ExternalConfig, LoggingConfig, RetryConfig, ServerConfig,
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
    pub api: ApiConfig,
    pub external: ExternalConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// 1. `UM_CONFIG_DIR`, else `./.um/`
    /// 2. Create the directory if missing
    /// 3. Read `config.toml` when present, else defaults
    /// 4. Apply `UM_*` environment overrides
    ///
    /// Does NOT validate; call `validate()` afterwards.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

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

    /// Priority: `UM_CONFIG_DIR` > `./.um/` (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.api.validate()?;
        self.external.validate()?;
        self.retry.validate()?;

        Ok(())
    }

    /// Absolute path of the SQLite file
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path of the log file, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration. The API key is never printed.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  api: default_limit={}, max_limit={}",
            self.api.default_user_limit, self.api.max_user_limit
        );
        info!(
            "  external: {} (api key: {}, timeout {}s)",
            self.external.url.as_deref().unwrap_or("not configured"),
            if self.external.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.external.timeout_secs
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("UM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("UM_ENVIRONMENT", &mut self.server.environment);

        // Database
        Self::apply_env_string("UM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "UM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("UM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UM_LOG_FILE", &mut self.logging.file);

        // API
        Self::apply_env_parse(
            "UM_API_DEFAULT_USER_LIMIT",
            &mut self.api.default_user_limit,
        );
        Self::apply_env_parse("UM_API_MAX_USER_LIMIT", &mut self.api.max_user_limit);

        // External
        Self::apply_env_option_string("UM_EXTERNAL_URL", &mut self.external.url);
        Self::apply_env_option_string("UM_EXTERNAL_API_KEY", &mut self.external.api_key);
        Self::apply_env_parse(
            "UM_EXTERNAL_TIMEOUT_SECS",
            &mut self.external.timeout_secs,
        );

        // Retry
        Self::apply_env_parse("UM_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "UM_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("UM_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "UM_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("UM_RETRY_JITTER", &mut self.retry.jitter);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// An empty value clears the option
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.trim().is_empty() { None } else { Some(val) };
        }
    }
}
