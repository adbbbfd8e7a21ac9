use crate::api::error::Result as ApiResult;
use crate::api::sync::sync_response::SyncResponse;
use crate::app_state::AppState;

use um_db::UserReconciler;

use axum::{Json, extract::State};

/// POST /api/fetch-external-data
///
/// Pull the upstream user list and reconcile it into the store.
pub async fn fetch_external_data(
    State(state): State<AppState>,
) -> ApiResult<Json<SyncResponse>> {
    let users = state.external.fetch_users().await?;

    let summary = UserReconciler::new(state.pool.clone())
        .reconcile(users)
        .await;

    Ok(Json(SyncResponse::success(
        "Data fetched and saved successfully",
        summary,
    )))
}
