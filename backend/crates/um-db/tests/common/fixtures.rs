use um_core::{ExternalUser, UserRecord};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

/// Upstream payload for a user with every typed field populated
pub fn external_payload(user_id: i64, first_name: &str, username: &str) -> Value {
    json!({
        "userID": user_id,
        "firstName": first_name,
        "lastName": "Doe",
        "username": username,
        "country": "United States",
        "accountID": 5000 + user_id,
        "userType": 1,
        "parentId": 0,
        "emailVerified": true,
        "openDate": "2024-01-15T10:30:00Z",
        "balance": 250.5
    })
}

/// A stored row built the same way the reconciler builds one
pub fn create_test_user(user_id: i64, open_date: Option<DateTime<Utc>>) -> UserRecord {
    let payload = json!({
        "userID": user_id,
        "firstName": format!("First{user_id}"),
        "lastName": format!("Last{user_id}"),
        "username": format!("user{user_id}"),
        "country": "Canada",
    });
    let external = ExternalUser::from_value(payload).expect("fixture payload is an object");

    let mut user = UserRecord::from_external(&external, Utc::now()).expect("fixture has a userID");
    user.open_date = open_date;
    user
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid fixture date")
}
