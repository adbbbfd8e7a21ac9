use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::sync::sync_response::TestDataResponse;
use crate::app_state::AppState;

use um_core::{ExternalUser, UserRecord};
use um_db::UserReconciler;

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};

/// Fixed demo users for a fresh install
pub fn demo_users() -> Vec<Value> {
    vec![
        json!({
            "userID": 1001,
            "firstName": "John",
            "lastName": "Doe",
            "username": "johndoe",
            "country": "United States",
            "openDate": "2024-01-15T10:30:00Z",
            "accountID": 5001,
            "userType": 1,
            "emailVerified": true
        }),
        json!({
            "userID": 1002,
            "firstName": "Jane",
            "lastName": "Smith",
            "username": "janesmith",
            "country": "Canada",
            "openDate": "2024-01-16T14:20:00Z",
            "accountID": 5002,
            "userType": 1,
            "emailVerified": true
        }),
        json!({
            "userID": 1003,
            "firstName": "Bob",
            "lastName": "Johnson",
            "username": "bobjohnson",
            "country": "United Kingdom",
            "openDate": "2024-01-17T09:15:00Z",
            "accountID": 5003,
            "userType": 2,
            "emailVerified": false
        }),
    ]
}

/// POST /api/test-data
///
/// Inserts the demo users that are not stored yet. Existing rows are left alone.
pub async fn create_test_data(State(state): State<AppState>) -> ApiResult<Json<TestDataResponse>> {
    let payloads = demo_users();
    let now = Utc::now();

    let records = payloads
        .iter()
        .map(|payload| {
            let external = ExternalUser::from_value(payload.clone())
                .map_err(|e| ApiError::internal(format!("Invalid demo user: {}", e)))?;
            UserRecord::from_external(&external, now)
                .map_err(|e| ApiError::internal(format!("Invalid demo user: {}", e)))
        })
        .collect::<ApiResult<Vec<_>>>()?;

    let created = UserReconciler::new(state.pool.clone())
        .insert_missing(records)
        .await?;

    Ok(Json(TestDataResponse {
        status: "success",
        message: format!("Created {} test users", created.len()),
        data: payloads,
    }))
}
