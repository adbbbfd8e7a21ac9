#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_config::Config;
use um_server::{AppState, ExternalClient};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// In-memory SQLite with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Config with fast retries, optionally pointing at a mock upstream
pub fn test_config(external_url: Option<String>) -> Config {
    let mut config = Config::default();
    config.external.url = external_url;
    config.external.api_key = Some("test-key".to_string());
    config.external.timeout_secs = 5;
    config.retry.initial_delay_ms = 10;
    config.retry.jitter = false;
    config
}

pub async fn create_test_app_state(external_url: Option<String>) -> AppState {
    let pool = create_test_pool().await;
    create_test_app_state_with_config(pool, test_config(external_url))
}

pub fn create_test_app_state_with_config(pool: SqlitePool, config: Config) -> AppState {
    let external = ExternalClient::new(&config.external, &config.retry)
        .expect("Failed to build external client");
    AppState::new(pool, config, external)
}

/// Insert a user directly, bypassing the API
pub async fn create_test_user(
    pool: &SqlitePool,
    user_id: i64,
    first_name: &str,
    country: &str,
    open_date: Option<i64>,
) {
    let now = chrono::Utc::now().timestamp();
    let payload = serde_json::json!({
        "userID": user_id,
        "firstName": first_name,
        "country": country,
    });

    sqlx::query(
        r#"
            INSERT INTO users (user_id, first_name, last_name, username, country,
                               open_date, full_data, created_at, updated_at)
            VALUES (?, ?, 'Tester', ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(first_name)
    .bind(format!("user{}", user_id))
    .bind(country)
    .bind(open_date)
    .bind(payload.to_string())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
