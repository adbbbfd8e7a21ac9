use crate::api::users::user_dto::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub status: &'static str,
    /// Rows in the store
    pub total: i64,
    /// Rows in this response
    pub showing: usize,
    pub users: Vec<UserDto>,
}
