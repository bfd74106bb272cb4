//! Error type for the upstream API seam.
//!
//! A 404 is not an error: the client maps it to an empty result before this
//! type is ever involved. Everything here is an upstream fault that callers
//! either propagate (export path) or collapse to an empty outcome with a
//! diagnostic (interactive path).

use thiserror::Error;

/// Faults from the REST Countries client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-404 HTTP error status.
    #[error("request failed with HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Network/transport failure, including response-body decode failures.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload was valid JSON transport-wise but not the shape we expect.
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
