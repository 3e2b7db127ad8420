//! Transport Errors
//!
//! Everything that can go wrong between the dashboard and the collection
//! resource. Callers only distinguish *which operation* failed, never why.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// Success status, but the body was not the expected entity
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Failure injected into an in-memory collection
    #[error("collection unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
