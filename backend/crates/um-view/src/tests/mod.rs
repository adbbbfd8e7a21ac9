mod format;
mod render;

use crate::UserSummary;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Map;

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn user(id: i64, first: &str, country: &str, open_date: Option<DateTime<Utc>>) -> UserSummary {
    UserSummary {
        user_id: id,
        first_name: Some(first.to_string()),
        last_name: Some("Tester".to_string()),
        username: Some(format!("{}{}", first.to_lowercase(), id)),
        country: Some(country.to_string()),
        account_id: Some(id + 5000),
        open_date,
        user_type: Some(1),
        parent_id: None,
        email_verified: false,
        extra: Map::new(),
    }
}

/// `count` users spread over distinct ids, all opened at `open_date`
pub fn users(count: usize, open_date: DateTime<Utc>) -> Vec<UserSummary> {
    (0..count as i64)
        .map(|i| user(i + 1, "User", "USA", Some(open_date)))
        .collect()
}
