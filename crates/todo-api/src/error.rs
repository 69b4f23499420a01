//! API Errors
//!
//! Everything a todo request can fail with, from the transport up to a
//! malformed collection.

use thiserror::Error;

/// Result type returned by every client operation
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bridge missing)
    #[error("transport error: {0}")]
    Transport(String),

    #[error("todo not found")]
    NotFound,

    /// Any other unexpected status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("duplicate todo id {0} in response")]
    DuplicateId(i32),
}
