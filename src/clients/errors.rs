//! HTTP-level error types.
//!
//! - [`StatusError`]: a non-2xx response, classified with a [`StatusReason`]
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for transport operations
//!
//! # Example
//!
//! ```rust,ignore
//! use kube_rest::clients::{HttpError, StatusReason, Transport};
//!
//! match client.get(&ctx, "/test/a").await {
//!     Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
//!     Err(HttpError::Status(e)) if e.reason() == StatusReason::NotFound => {}
//!     Err(HttpError::Canceled) => println!("canceled"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::status::{Status, StatusReason};

/// Error returned when the server answers with a non-2xx status.
///
/// Carries the decoded [`Status`] and the raw response body.
#[derive(Clone, Debug, Error)]
#[error("{}", status.message)]
pub struct StatusError {
    /// The decoded status.
    pub status: Status,
    body: Vec<u8>,
}

impl StatusError {
    /// Creates a status error from a decoded status and the raw body.
    #[must_use]
    pub const fn new(status: Status, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns the failure reason.
    #[must_use]
    pub const fn reason(&self) -> StatusReason {
        self.status.reason
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.status.code
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is not absolute.
    #[error("Request path '{path}' must be absolute.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller canceled the request.
    #[error("context canceled")]
    Canceled,

    /// The caller's deadline elapsed before the request completed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}
