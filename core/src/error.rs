//! Error types for the hero API client.
//!
//! # Design
//! `ApiError` describes why a response could not be turned into a value;
//! `TransportError` describes why no response arrived at all. `HeroService`
//! absorbs both the same way, but `HeroClient` keeps them apart so its
//! parsers stay testable on their own. The `Display` text of either is what
//! ends up in the message log.

use thiserror::Error;

/// Errors returned by `HeroClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404, e.g. no hero with the requested id.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// The request never produced a response: connection refused, DNS failure,
/// timeout, or a request the transport could not even build.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
