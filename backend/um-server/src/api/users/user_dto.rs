use um_core::UserRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row shape returned by the user list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub username: String,
    pub country: String,
    #[serde(rename = "openDate")]
    pub open_date: Option<DateTime<Utc>>,
    #[serde(rename = "accountID")]
    pub account_id: Option<i64>,
    #[serde(rename = "userType")]
    pub user_type: i64,
    #[serde(rename = "parentId")]
    pub parent_id: Option<i64>,
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserDto {
    fn from(u: UserRecord) -> Self {
        Self {
            user_id: u.user_id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
            country: u.country,
            open_date: u.open_date,
            account_id: u.account_id,
            user_type: u.user_type,
            parent_id: u.parent_id,
            email_verified: u.email_verified,
            created_at: u.created_at,
        }
    }
}
