use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// HTTP client for the um-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn error bodies into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
            let message = error
                .and_then(|e| e.get("message"))
                .or_else(|| body.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Request failed")
                .to_string();

            return Err(ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Most recently opened users, newest first
    pub async fn list_users(&self, limit: Option<i64>) -> CliClientResult<Value> {
        let path = match limit {
            Some(limit) => format!("/api/users?limit={}", limit),
            None => "/api/users".to_string(),
        };
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn get_user(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/users/{}", id));
        self.execute(req).await
    }

    pub async fn get_stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/stats");
        self.execute(req).await
    }

    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/health");
        self.execute(req).await
    }

    // =========================================================================
    // Sync
    // =========================================================================

    /// Post a batch of upstream records, either `{data: [...]}` or a bare array
    pub async fn save_users(&self, batch: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/saveUsers").json(batch);
        self.execute(req).await
    }

    /// Ask the server to pull from the upstream API and reconcile
    pub async fn fetch_external(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/fetch-external-data");
        self.execute(req).await
    }

    pub async fn create_test_data(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/test-data");
        self.execute(req).await
    }
}
