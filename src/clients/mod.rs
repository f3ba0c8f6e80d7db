//! The transport layer.
//!
//! This module turns a [`RestConfig`](crate::RestConfig) into something that
//! speaks six HTTP verbs over raw bytes. It knows nothing about objects; the
//! [`rest`](crate::rest) module builds the CRUD contract on top of it.
//!
//! # Overview
//!
//! - [`Transport`]: the six-verb contract (get, list, create, update, patch, delete)
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`Options`]: per-call headers and query parameters
//! - [`Context`]: cancellation and deadlines for in-flight calls
//! - [`PatchType`]: the partial-update conventions sent as `Content-Type`
//! - [`HttpError`], [`StatusError`], [`StatusReason`]: failures
//!
//! # Verb mapping
//!
//! | operation | method | options |
//! |-----------|--------|---------|
//! | `get`     | GET    | no      |
//! | `list`    | GET    | yes     |
//! | `create`  | POST   | yes     |
//! | `update`  | PUT    | yes     |
//! | `patch`   | PATCH  | no      |
//! | `delete`  | DELETE | yes     |
//!
//! No operation retries. Non-2xx responses surface as [`HttpError::Status`].

mod context;
mod errors;
mod http_client;
mod http_request;
mod options;
mod rate_limit;
mod status;
mod transport;

pub use context::Context;
pub use errors::{HttpError, InvalidHttpRequestError, StatusError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, PatchType};
pub use options::{ApplyToRequest, Options};
pub use status::{enrich_status_error, Status, StatusReason};
pub use transport::Transport;
