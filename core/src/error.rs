//! Error type for the notes API client.
//!
//! # Design
//! Every failed HTTP interaction is a `RequestError`. The variants only record
//! where the failure happened for logging; no status code is promoted into a
//! domain error, so a 404 and a 500 land in the same `Status` variant.

use thiserror::Error;

/// Any failed HTTP interaction with the notes service.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

impl RequestError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
