use serde::Deserialize;

/// Query parameters for `GET /api/users`
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Kept as text so a malformed value falls back to the default instead of a 400
    pub limit: Option<String>,
}
