use crate::{Result as ViewResult, ViewError};

use um_core::open_date_from_value;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One user as shown in the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "accountID", default)]
    pub account_id: Option<i64>,
    #[serde(rename = "openDate", default, deserialize_with = "open_date")]
    pub open_date: Option<DateTime<Utc>>,
    #[serde(rename = "userType", default)]
    pub user_type: Option<i64>,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<i64>,
    #[serde(rename = "emailVerified", default)]
    pub email_verified: bool,
    /// Anything else the server sent, including `fullData` on detail responses
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn open_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(open_date_from_value))
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Upper-cased first letter of the first name, `U` when there is none
    pub fn initial(&self) -> char {
        self.first_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    /// Look up an attribute the typed fields don't cover, falling back to
    /// the stored upstream payload.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra
            .get(key)
            .or_else(|| self.extra.get("fullData").and_then(|data| data.get(key)))
            .filter(|value| is_truthy(value))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode a `GET /api/users` response body.
#[track_caller]
pub fn users_from_response(body: Value) -> ViewResult<Vec<UserSummary>> {
    let location = ErrorLocation::from(Location::caller());

    let Value::Object(mut map) = body else {
        return Err(ViewError::Response {
            message: "expected a JSON object".to_string(),
            location,
        });
    };

    if map.get("status").and_then(Value::as_str) != Some("success") {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("status is not success")
            .to_string();
        return Err(ViewError::Response { message, location });
    }

    let users = map.remove("users").unwrap_or(Value::Array(Vec::new()));
    serde_json::from_value(users).map_err(|source| ViewError::Decode { source, location })
}
