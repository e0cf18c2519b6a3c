//! # API Errors
//!
//! Failure taxonomy shared by both API clients and the repository.

use std::error::Error as _;
use thiserror::Error;

/// Everything that can go wrong while fetching an image
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, refused connection, timeout, broken body stream
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    /// The body was not valid JSON or did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A by-ID lookup answered 404
    #[error("image not found")]
    NotFound,

    /// A search returned zero items where one was expected
    #[error("search returned no images")]
    EmptyResult,

    #[error("search limit must be at least 1")]
    InvalidLimit,

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),
}

impl ApiError {
    /// Short name of the failure kind, e.g. `"DecodeError"`
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NetworkError",
            ApiError::Http { .. } => "HttpError",
            ApiError::Decode(_) => "DecodeError",
            ApiError::NotFound => "NotFound",
            ApiError::EmptyResult => "EmptyResult",
            ApiError::InvalidLimit => "InvalidLimit",
            ApiError::InvalidUrl { .. } => "InvalidUrl",
            ApiError::ClientSetup(_) => "ClientSetupError",
        }
    }

    /// Human-readable description stored in a failed fetch state
    ///
    /// Starts with the kind and includes the full chain of underlying causes.
    pub fn failure_message(&self) -> String {
        let mut message = format!("{}: {self}", self.kind());
        let mut cause = self.source().and_then(|e| e.source());
        while let Some(err) = cause {
            message.push_str(&format!("\n  Caused by: {err}"));
            cause = err.source();
        }
        message
    }
}
