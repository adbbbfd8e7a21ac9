use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_USER_LIMIT, DEFAULT_USER_LIMIT};

use serde::Deserialize;

/// Limits applied to `GET /api/users`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Rows returned when the request has no usable `limit`
    pub default_user_limit: i64,
    /// Upper bound for any requested `limit`
    pub max_user_limit: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_user_limit: DEFAULT_USER_LIMIT,
            max_user_limit: DEFAULT_MAX_USER_LIMIT,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_user_limit < 1 || self.default_user_limit > self.max_user_limit {
            return Err(ConfigError::api(format!(
                "api.default_user_limit must be 1-{}, got {}",
                self.max_user_limit, self.default_user_limit
            )));
        }

        Ok(())
    }

    /// Resolve a requested row limit. Missing, unparseable or non-positive
    /// values fall back to the default; large values are capped.
    pub fn effective_limit(&self, requested: Option<&str>) -> i64 {
        requested
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(self.default_user_limit)
            .min(self.max_user_limit)
    }
}
