//! User payload as delivered by the upstream trading platform.

use crate::models::lenient;
use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A partially typed upstream user record.
///
/// Only the fields the dashboard reads are typed; every other attribute is
/// kept in `extra`. The untouched payload is kept in `raw` so it can be
/// stored verbatim.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExternalUser {
    #[serde(rename = "userID", default, deserialize_with = "lenient::id")]
    pub user_id: Option<i64>,

    #[serde(rename = "firstName", default, deserialize_with = "lenient::text")]
    pub first_name: Option<String>,

    #[serde(rename = "lastName", default, deserialize_with = "lenient::text")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub country: Option<String>,

    #[serde(rename = "accountID", default, deserialize_with = "lenient::id")]
    pub account_id: Option<i64>,

    #[serde(rename = "userType", default, deserialize_with = "lenient::id")]
    pub user_type: Option<i64>,

    #[serde(rename = "parentId", default, deserialize_with = "lenient::id")]
    pub parent_id: Option<i64>,

    #[serde(rename = "emailVerified", default, deserialize_with = "lenient::flag")]
    pub email_verified: Option<bool>,

    #[serde(rename = "openDate", default, deserialize_with = "lenient::timestamp")]
    pub open_date: Option<DateTime<Utc>>,

    /// Attributes without a typed field
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// The payload exactly as received
    #[serde(skip)]
    pub raw: Value,
}

impl ExternalUser {
    /// Decode one upstream record. Fails only when the value is not a JSON object.
    #[track_caller]
    pub fn from_value(value: Value) -> CoreResult<Self> {
        if !value.is_object() {
            return Err(CoreError::Validation {
                message: format!("expected a JSON object, got {}", kind_of(&value)),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut user: ExternalUser =
            serde_json::from_value(value.clone()).map_err(|source| CoreError::Payload {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
        user.raw = value;

        Ok(user)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
