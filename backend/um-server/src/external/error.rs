use error_location::ErrorLocation;
use thiserror::Error;

use std::panic::Location;

#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("External API URL is not configured {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("External API request failed: {source} {location}")]
    Request {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("External API returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Unexpected external API response: {message} {location}")]
    Shape {
        message: String,
        location: ErrorLocation,
    },
}

impl ExternalError {
    #[track_caller]
    pub fn shape<S: Into<String>>(message: S) -> Self {
        Self::Shape {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ExternalError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Request {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExternalError>;
