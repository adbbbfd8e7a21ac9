use crate::api::error::Result as ApiResult;
use crate::api::stats::stats_response::StatsResponse;
use crate::app_state::AppState;

use um_db::UserRepository;

use axum::{Json, extract::State};
use chrono::Local;

/// GET /api/stats
///
/// "Today" follows the server's local calendar day.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = UserRepository::new(state.pool.clone())
        .stats(Local::now())
        .await?;

    Ok(Json(StatsResponse {
        status: "success",
        stats,
    }))
}
