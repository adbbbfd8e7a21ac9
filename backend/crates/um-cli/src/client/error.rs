use um_view::ViewError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to server failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// Non-2xx answer. `code` comes from the error body, or `HTTP_<status>`.
    #[error("Server returned {code}: {message} {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid JSON: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("File error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error(transparent)]
    View(#[from] ViewError),
}

impl ClientError {
    /// Message without the source location, for notices
    pub fn summary(&self) -> String {
        match self {
            ClientError::Http { source, .. } => source.to_string(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Json { source, .. } => source.to_string(),
            ClientError::Io { source, .. } => source.to_string(),
            ClientError::View(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ClientError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ClientError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
