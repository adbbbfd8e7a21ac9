use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the dashboard header
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: i64,
    /// Users whose open date falls on the current local day
    pub today_users: i64,
    /// Distinct non-empty countries
    pub countries: i64,
    /// Users opened within the last 7 days
    pub recent_users: i64,
}
