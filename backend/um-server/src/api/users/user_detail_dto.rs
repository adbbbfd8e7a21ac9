use crate::api::users::user_dto::UserDto;

use um_core::UserRecord;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Single user with timestamps and the stored upstream payload
#[derive(Debug, Serialize)]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub summary: UserDto,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "fullData")]
    pub full_data: Value,
}

impl From<UserRecord> for UserDetailDto {
    fn from(mut u: UserRecord) -> Self {
        let updated_at = u.updated_at;
        let full_data = std::mem::take(&mut u.full_data);

        Self {
            summary: u.into(),
            updated_at,
            full_data,
        }
    }
}
