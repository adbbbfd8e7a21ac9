//! User read handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::users::{
    list_users_query::ListUsersQuery, user_dto::UserDto, user_list_response::UserListResponse,
    user_response::UserResponse,
};
use crate::app_state::AppState;

use um_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;

/// GET /api/users?limit=N
///
/// Newest accounts first
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let limit = state.config.api.effective_limit(query.limit.as_deref());

    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_recent(limit).await?;
    let total = repo.count().await?;

    Ok(Json(UserListResponse {
        status: "success",
        total,
        showing: users.len(),
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id: i64 = id.trim().parse().map_err(|_| ApiError::Validation {
        message: format!("Invalid user id: {}", id),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse {
        status: "success",
        user: user.into(),
    }))
}
