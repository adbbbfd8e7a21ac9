//! Client for the upstream trading-platform user API.

use crate::external::{ExternalError, ExternalResult, with_retry};

use um_config::{ExternalConfig, RetryConfig};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use reqwest::header::ACCEPT;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ExternalClient {
    url: Option<String>,
    api_key: Option<String>,
    retry: RetryConfig,
    http: reqwest::Client,
}

impl ExternalClient {
    pub fn new(external: &ExternalConfig, retry: &RetryConfig) -> ExternalResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(external.timeout_secs))
            .build()?;

        Ok(Self {
            url: external.url.clone().filter(|u| !u.trim().is_empty()),
            api_key: external.api_key.clone(),
            retry: retry.clone(),
            http,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Fetch the current user list, retrying transient failures.
    pub async fn fetch_users(&self) -> ExternalResult<Vec<Value>> {
        let url = self.url.as_deref().ok_or_else(|| ExternalError::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Fetching users from external API");
        let body = with_retry(&self.retry, "External user fetch", || self.fetch_once(url)).await?;

        let users = extract_users(body)?;
        info!("External API returned {} users", users.len());
        Ok(users)
    }

    async fn fetch_once(&self, url: &str) -> ExternalResult<Value> {
        let mut request = self.http.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExternalError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ExternalError::shape(format!("body is not JSON: {}", e)))
    }
}

/// Accept either a bare array of users or an object wrapping it in `data`.
#[track_caller]
pub fn extract_users(body: Value) -> ExternalResult<Vec<Value>> {
    match body {
        Value::Array(users) => Ok(users),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(users)) => Ok(users),
            _ => Err(ExternalError::shape("expected an array or an object with a data array")),
        },
        _ => Err(ExternalError::shape("expected an array or an object with a data array")),
    }
}
