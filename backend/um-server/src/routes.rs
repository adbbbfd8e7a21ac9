use crate::api::{
    stats::stats::get_stats,
    sync::{
        fetch_external::fetch_external_data, save_users::save_users, test_data::create_test_data,
    },
    users::users::{get_user, list_users},
};
use crate::{app_state::AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
        .route("/api/stats", get(get_stats))
        .route("/api/saveUsers", post(save_users))
        .route("/api/fetch-external-data", post(fetch_external_data))
        .route("/api/test-data", post(create_test_data))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
