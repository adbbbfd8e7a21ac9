//! Stored user row - the local mirror of an upstream user.

use crate::{CoreError, ExternalUser, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `userType` assumed when the upstream record has none
pub const DEFAULT_USER_TYPE: i64 = 1;

/// A mirrored user. `user_id` is the external key; every other typed field
/// is overwritten on each sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub country: String,
    pub account_id: Option<i64>,
    pub user_type: i64,
    pub parent_id: Option<i64>,
    pub email_verified: bool,
    pub open_date: Option<DateTime<Utc>>,
    /// Full upstream payload
    pub full_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a row from an upstream record, applying column defaults.
    #[track_caller]
    pub fn from_external(user: &ExternalUser, now: DateTime<Utc>) -> CoreResult<Self> {
        let user_id = user.user_id.ok_or_else(|| CoreError::Validation {
            message: "userID is missing".to_string(),
            field: Some("userID".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            user_id,
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            username: user.username.clone().unwrap_or_default(),
            country: user.country.clone().unwrap_or_default(),
            account_id: user.account_id,
            user_type: user.user_type.unwrap_or(DEFAULT_USER_TYPE),
            parent_id: user.parent_id,
            email_verified: user.email_verified.unwrap_or(false),
            open_date: user.open_date,
            full_data: user.raw.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}
