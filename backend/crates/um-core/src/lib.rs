pub mod error;
pub mod models;
pub mod sync;


pub use error::{CoreError, Result};
pub use models::external_user::ExternalUser;
pub use models::open_date::{open_date_from_epoch, open_date_from_value, parse_open_date};
pub use models::user_record::{DEFAULT_USER_TYPE, UserRecord};
pub use models::user_stats::UserStats;
pub use sync::reconcile_outcome::ReconcileOutcome;
pub use sync::sync_summary::SyncSummary;
