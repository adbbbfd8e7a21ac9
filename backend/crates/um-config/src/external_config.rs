use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXTERNAL_TIMEOUT_SECS, MAX_EXTERNAL_TIMEOUT_SECS,
    MIN_EXTERNAL_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Upstream trading-platform user API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    pub url: Option<String>,
    /// Sent as a bearer token. Never logged.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: DEFAULT_EXTERNAL_TIMEOUT_SECS,
        }
    }
}

impl ExternalConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::external(format!(
                "external.url must start with http:// or https://, got {}",
                url
            )));
        }

        if self.timeout_secs < MIN_EXTERNAL_TIMEOUT_SECS
            || self.timeout_secs > MAX_EXTERNAL_TIMEOUT_SECS
        {
            return Err(ConfigError::external(format!(
                "external.timeout_secs must be {}-{}, got {}",
                MIN_EXTERNAL_TIMEOUT_SECS, MAX_EXTERNAL_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// True when a fetch can be attempted
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}
