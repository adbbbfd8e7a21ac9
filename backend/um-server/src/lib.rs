pub mod api;
pub mod app_state;
pub mod error;
pub mod external;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use app_state::AppState;
pub use external::{ExternalClient, ExternalError};
pub use routes::build_router;
