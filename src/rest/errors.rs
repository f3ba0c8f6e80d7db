//! Error types for CRUD operations.
//!
//! - [`CodecError`]: an object could not be serialized or parsed
//! - [`RestError`]: unified error type for [`RestClient`](crate::rest::RestClient)
//!
//! # Example
//!
//! ```rust,ignore
//! use kube_rest::rest::RestError;
//!
//! match client.create(&ctx, &mut pod, None).await {
//!     Ok(()) => println!("created {}", pod.name),
//!     Err(e) if e.is_already_exists() => println!("exists: {e}"),
//!     Err(RestError::Codec(e)) => println!("bad payload: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

use crate::clients::{enrich_status_error, HttpError, StatusError, StatusReason};

/// Error raised by [`Object`](crate::rest::Object) serialization and parsing.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A merge patch was requested for a document that is not a JSON object.
    #[error("cannot compute a merge patch: the {document} document is not a JSON object")]
    NotAnObject {
        /// Which side of the diff was rejected ("original" or "modified").
        document: &'static str,
    },

    /// A custom encoding failed.
    #[error("{0}")]
    Custom(String),
}

/// Error type for CRUD operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The object could not be serialized, or the response could not be
    /// parsed into it.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The transport call failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Translates a transport failure for the caller.
    ///
    /// Status errors whose reason carries server detail get the raw response
    /// body as their message; all other errors pass through unchanged.
    #[must_use]
    pub fn from_transport(error: HttpError) -> Self {
        match error {
            HttpError::Status(status) => {
                let body = status.body().to_vec();
                Self::Http(HttpError::Status(enrich_status_error(status, &body)))
            }
            other => Self::Http(other),
        }
    }

    /// Returns the status error, if the server rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusError> {
        match self {
            Self::Http(HttpError::Status(status)) => Some(status),
            _ => None,
        }
    }

    /// Returns the failure reason reported by the server.
    #[must_use]
    pub fn reason(&self) -> Option<StatusReason> {
        self.status().map(StatusError::reason)
    }

    /// Returns the HTTP status code reported by the server.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status().map(StatusError::code)
    }

    /// Whether the addressed object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.reason() == Some(StatusReason::NotFound)
    }

    /// Whether the request conflicted with the server state.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.reason() == Some(StatusReason::Conflict)
    }

    /// Whether the object already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.reason() == Some(StatusReason::AlreadyExists)
    }

    /// Whether the call was canceled through its context.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Http(HttpError::Canceled))
    }
}

// Verify RestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
};
