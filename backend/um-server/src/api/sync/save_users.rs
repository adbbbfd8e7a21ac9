use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::sync::sync_response::SyncResponse;
use crate::app_state::AppState;

use um_core::SyncSummary;
use um_db::UserReconciler;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;
use serde_json::Value;

const BATCH_SHAPE_MESSAGE: &str = "Expected { data: [users] } or [users] format";

/// POST /api/saveUsers
///
/// Body is either `{ "data": [...] }` or a bare array.
pub async fn save_users(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<SyncResponse>> {
    let Json(body) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let users = batch_from_body(body)?;

    if users.is_empty() {
        return Ok(Json(SyncResponse::success(
            "No users to save",
            SyncSummary::default(),
        )));
    }

    info!("Received {} users to save", users.len());
    let summary = UserReconciler::new(state.pool.clone())
        .reconcile(users)
        .await;

    Ok(Json(SyncResponse::success(
        format!("Processed {} users successfully", summary.total_received),
        summary,
    )))
}

#[track_caller]
pub fn batch_from_body(body: Value) -> ApiResult<Vec<Value>> {
    match body {
        Value::Array(users) => Ok(users),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(users)) => Ok(users),
            _ => Err(ApiError::bad_request(BATCH_SHAPE_MESSAGE)),
        },
        _ => Err(ApiError::bad_request(BATCH_SHAPE_MESSAGE)),
    }
}
