//! REST API error types
//!
//! Every error renders as `{status: "error", error: {code, message, field?}}`.

use crate::external::ExternalError;

use um_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Always "error"
    pub status: &'static str,
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 500, the upstream user API failed or answered with an unusable body
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::Upstream { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                message,
                None,
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorResponse {
            status: "error",
            error: ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Database detail stays in the log
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ExternalError> for ApiError {
    #[track_caller]
    fn from(e: ExternalError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ExternalError::NotConfigured { .. } => ApiError::Internal {
                message: "External API URL is not configured".to_string(),
                location,
            },
            ExternalError::Shape { message, .. } => ApiError::Upstream {
                message: format!("Unexpected external API response: {}", message),
                location,
            },
            ExternalError::Status { status, .. } => ApiError::Upstream {
                message: format!("External API returned HTTP {}", status),
                location,
            },
            ExternalError::Request { source, .. } => {
                log::error!("External request error: {}", source);
                ApiError::Upstream {
                    message: "Failed to fetch data from external API".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
