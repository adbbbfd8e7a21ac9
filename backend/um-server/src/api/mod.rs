pub mod error;
pub mod stats;
pub mod sync;
pub mod users;
