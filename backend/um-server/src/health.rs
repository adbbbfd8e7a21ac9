use crate::app_state::AppState;

use um_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /api/health - reachability of the store plus build info
pub async fn health_check(State(state): State<AppState>) -> Response {
    match UserRepository::new(state.pool.clone()).count().await {
        Ok(total) => {
            let health = json!({
                "status": "healthy",
                "totalUsers": total,
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "environment": state.config.server.environment,
                "version": env!("CARGO_PKG_VERSION"),
            });

            (StatusCode::OK, Json(health)).into_response()
        }
        Err(e) => {
            log::error!("Health check failed: {}", e);

            let body = json!({
                "status": "error",
                "message": "Database connection failed",
                "error": e.to_string(),
            });

            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
