use um_core::UserStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub status: &'static str,
    pub stats: UserStats,
}
