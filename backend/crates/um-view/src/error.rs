use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("No data to export {location}")]
    NothingToExport { location: ErrorLocation },

    #[error("Unknown date filter \"{name}\", expected today, week, month or all {location}")]
    UnknownDateBucket { name: String, location: ErrorLocation },

    #[error("Unexpected user list response: {message} {location}")]
    Response {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode users: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, ViewError>;
