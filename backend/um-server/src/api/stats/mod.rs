pub mod stats;
pub mod stats_response;
