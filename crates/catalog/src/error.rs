use std::sync::Arc;

use thiserror::Error;

/// Why a catalog fetch failed.
///
/// Cloneable so the store can keep the last failure around as observable
/// state while still handing it back to the caller.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(Arc<reqwest::Error>),

    #[error("Data service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed catalog payload: {0}")]
    Decode(Arc<serde_json::Error>),

    #[error("Invalid data service url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http(Arc::new(error))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(Arc::new(error))
    }
}
