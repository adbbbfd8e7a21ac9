use thiserror::Error;

/// Startup failures. Nothing after `serve` is fatal.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] um_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] um_db::DbError),

    #[error("Failed to open database: {0}")]
    Pool(#[from] sqlx::Error),

    #[error("External client error: {0}")]
    External(#[from] crate::external::ExternalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
