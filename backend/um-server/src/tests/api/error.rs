use crate::ApiError;
use crate::external::ExternalError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_status() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid user id: abc".into(),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("Expected an array").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_upstream_error_returns_500_with_upstream_code() {
    let error = ApiError::Upstream {
        message: "External API returned HTTP 502".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::internal("boom").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_error_does_not_leak_details() {
    let db_error = um_db::DbError::Decode {
        message: "secret column detail".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_row_not_found_maps_to_not_found() {
    let api_error: ApiError = um_db::DbError::from(sqlx::Error::RowNotFound).into();

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

#[test]
fn test_unconfigured_external_maps_to_internal() {
    let error = ExternalError::NotConfigured {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn test_external_status_maps_to_upstream() {
    let error = ExternalError::Status {
        status: 503,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = error.into();

    match api_error {
        ApiError::Upstream { message, .. } => assert!(message.contains("503")),
        other => panic!("Expected Upstream, got {:?}", other),
    }
}
