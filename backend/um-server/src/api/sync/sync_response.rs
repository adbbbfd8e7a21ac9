use um_core::SyncSummary;

use serde::Serialize;
use serde_json::Value;

/// Result of a reconciliation batch
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
    pub message: String,
    pub summary: SyncSummary,
}

impl SyncResponse {
    pub fn success(message: impl Into<String>, summary: SyncSummary) -> Self {
        Self {
            status: "success",
            message: message.into(),
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TestDataResponse {
    pub status: &'static str,
    pub message: String,
    pub data: Vec<Value>,
}
