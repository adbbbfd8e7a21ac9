pub mod client;
pub mod error;
pub mod retry;

pub use client::{ExternalClient, extract_users};
pub use error::{ExternalError, Result as ExternalResult};
pub use retry::{IsRetryable, with_retry};
