//! HTTP plumbing shared by the wire clients.

mod http;

pub use http::HttpTransport;

use thiserror::Error;

/// Low-level transport failures: the request never produced a usable
/// response body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
