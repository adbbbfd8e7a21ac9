use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub fn list_body(users: Value) -> Value {
    json!({
        "status": "success",
        "total": users.as_array().map(Vec::len).unwrap_or(0),
        "showing": users.as_array().map(Vec::len).unwrap_or(0),
        "users": users
    })
}

pub fn sample_users() -> Value {
    json!([
        {
            "userID": 1001,
            "firstName": "John",
            "lastName": "Doe",
            "username": "johndoe",
            "country": "USA",
            "accountID": 5001,
            "openDate": "2024-01-15T10:30:00Z",
            "userType": 1,
            "parentId": null,
            "emailVerified": true
        },
        {
            "userID": 1002,
            "firstName": "Jane",
            "lastName": "Smith",
            "username": "janesmith",
            "country": "UK",
            "accountID": 5002,
            "openDate": "2024-01-16T14:20:00Z",
            "userType": 1,
            "parentId": null,
            "emailVerified": false
        }
    ])
}

/// Answer the dashboard's list request with `users`
pub async fn mount_users(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(users)))
        .mount(server)
        .await;
}
