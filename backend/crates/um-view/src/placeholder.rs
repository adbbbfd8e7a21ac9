//! Stand-in users shown when the server can't be reached.

use crate::UserSummary;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::Map;

pub const PLACEHOLDER_COUNT: usize = 50;

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Mike", "Sarah", "David", "Emma", "Chris", "Lisa",
];
const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];
const COUNTRIES: [&str; 8] = [
    "USA",
    "UK",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Japan",
    "Brazil",
];

pub fn placeholder_users() -> Vec<UserSummary> {
    placeholder_users_with(&mut rand::rng(), Utc::now())
}

/// Generate [`PLACEHOLDER_COUNT`] users opened at random instants within the
/// year before `now`.
pub fn placeholder_users_with<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<UserSummary> {
    let year_ms = Duration::days(365).num_milliseconds();

    (0..PLACEHOLDER_COUNT)
        .map(|i| {
            let id = 1000 + i as i64;
            let age = Duration::milliseconds(rng.random_range(0..year_ms));

            UserSummary {
                user_id: id,
                first_name: Some(FIRST_NAMES[i % FIRST_NAMES.len()].to_string()),
                last_name: Some(LAST_NAMES[i % LAST_NAMES.len()].to_string()),
                username: Some(format!("user{}", id)),
                country: Some(COUNTRIES[i % COUNTRIES.len()].to_string()),
                account_id: Some(2000 + i as i64),
                open_date: Some(now - age),
                user_type: Some(1),
                parent_id: None,
                email_verified: rng.random::<f64>() > 0.3,
                extra: Map::new(),
            }
        })
        .collect()
}
