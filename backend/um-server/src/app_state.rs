use crate::external::ExternalClient;

use um_config::Config;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub external: ExternalClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config, external: ExternalClient) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            external,
        }
    }
}
