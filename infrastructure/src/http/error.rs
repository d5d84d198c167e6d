//! Error types for building HTTP adapters

use thiserror::Error;

/// Result type alias for adapter construction
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur while setting up an HTTP adapter.
///
/// Failures of an individual exchange are reported as
/// [`ExchangeError`](localchat_application::ExchangeError) instead.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
