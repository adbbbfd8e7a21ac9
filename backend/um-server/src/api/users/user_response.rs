use crate::api::users::user_detail_dto::UserDetailDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub status: &'static str,
    pub user: UserDetailDto,
}
