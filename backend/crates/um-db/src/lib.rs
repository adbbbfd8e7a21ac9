pub mod error;
pub mod repositories;
pub mod sync;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use sync::user_reconciler::UserReconciler;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Apply the bundled schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let location = ErrorLocation::from(Location::caller());

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location,
        })
}
