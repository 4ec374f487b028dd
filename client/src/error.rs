//! Errors returned by `TodoClient` parse and build methods.
//!
//! `NotFound` and `BadRequest` get dedicated variants because callers act on
//! them; every other unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the payload; carries its plain-text reason.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A 201 arrived without a `Location` header.
    #[error("created response is missing a Location header")]
    MissingLocation,

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
