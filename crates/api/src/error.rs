//! Error type for game server calls.
use thiserror::Error;

/// Errors surfaced by [`crate::GameApi`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a response body that did not decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Used by [`crate::MockApi`] to simulate a failing endpoint.
    #[error("simulated failure: {0}")]
    Simulated(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
