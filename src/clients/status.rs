//! Machine-readable failure payloads.
//!
//! Kubernetes-style servers answer failed requests with a `Status` document:
//!
//! ```json
//! {"kind":"Status","status":"Failure","message":"...","reason":"AlreadyExists","code":409}
//! ```
//!
//! [`Status::from_response`] decodes that document when present and falls
//! back to a reason derived from the HTTP status code otherwise, so every
//! non-2xx response carries a [`StatusReason`].

use serde::Deserialize;

use crate::clients::errors::StatusError;
use crate::clients::http_request::HttpMethod;

/// The closed set of failure reasons a server can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusReason {
    /// The request itself was malformed.
    BadRequest,
    /// The request lacked valid credentials.
    Unauthorized,
    /// The credentials are not allowed to perform the request.
    Forbidden,
    /// The addressed resource does not exist.
    NotFound,
    /// A resource with the same identity already exists.
    AlreadyExists,
    /// The request conflicts with the current server state.
    Conflict,
    /// The resource existed but is gone.
    Gone,
    /// The submitted object failed validation.
    Invalid,
    /// The verb is not supported on this path.
    MethodNotAllowed,
    /// None of the accepted media types can be produced.
    NotAcceptable,
    /// The request body was too large.
    RequestEntityTooLarge,
    /// The request content type is not supported.
    UnsupportedMediaType,
    /// The client is being throttled.
    TooManyRequests,
    /// The server failed internally.
    InternalError,
    /// The server is temporarily unavailable.
    ServiceUnavailable,
    /// The server timed out processing the request.
    Timeout,
    /// The requested content has expired.
    Expired,
    /// Anything the server did not classify.
    Unknown,
}

impl StatusReason {
    /// Returns the wire spelling of this reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::AlreadyExists => "AlreadyExists",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::Invalid => "Invalid",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::NotAcceptable => "NotAcceptable",
            Self::RequestEntityTooLarge => "RequestEntityTooLarge",
            Self::UnsupportedMediaType => "UnsupportedMediaType",
            Self::TooManyRequests => "TooManyRequests",
            Self::InternalError => "InternalError",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Timeout => "Timeout",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses the wire spelling of a reason. Unrecognized values map to
    /// [`StatusReason::Unknown`].
    #[must_use]
    pub fn from_wire(reason: &str) -> Self {
        match reason {
            "BadRequest" => Self::BadRequest,
            "Unauthorized" => Self::Unauthorized,
            "Forbidden" => Self::Forbidden,
            "NotFound" => Self::NotFound,
            "AlreadyExists" => Self::AlreadyExists,
            "Conflict" => Self::Conflict,
            "Gone" => Self::Gone,
            "Invalid" => Self::Invalid,
            "MethodNotAllowed" => Self::MethodNotAllowed,
            "NotAcceptable" => Self::NotAcceptable,
            "RequestEntityTooLarge" => Self::RequestEntityTooLarge,
            "UnsupportedMediaType" => Self::UnsupportedMediaType,
            "TooManyRequests" => Self::TooManyRequests,
            "InternalError" => Self::InternalError,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "Timeout" => Self::Timeout,
            "Expired" => Self::Expired,
            _ => Self::Unknown,
        }
    }

    /// Derives a reason from an HTTP status code.
    #[must_use]
    pub const fn from_status_code(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            406 => Self::NotAcceptable,
            409 => Self::Conflict,
            410 => Self::Gone,
            413 => Self::RequestEntityTooLarge,
            415 => Self::UnsupportedMediaType,
            422 => Self::Invalid,
            429 => Self::TooManyRequests,
            500 => Self::InternalError,
            503 => Self::ServiceUnavailable,
            504 => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// Whether the raw response body is more useful to a caller than the
    /// generic message for this reason.
    #[must_use]
    pub const fn carries_server_detail(self) -> bool {
        matches!(self, Self::BadRequest | Self::Conflict | Self::AlreadyExists)
    }

    const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "the server rejected our request for an unknown reason",
            Self::Unauthorized => "the server has asked for the client to provide credentials",
            Self::Forbidden => "the server does not allow access to the requested resource",
            Self::NotFound => "the server could not find the requested resource",
            Self::AlreadyExists => "the resource already exists",
            Self::Conflict => "the server reported a conflict",
            Self::Gone => "the resource is no longer available",
            Self::Invalid => "the server rejected the submitted object",
            Self::MethodNotAllowed => "the server does not allow this method on the requested resource",
            Self::NotAcceptable => "the server was unable to respond with a content type that the client supports",
            Self::RequestEntityTooLarge => "the server has rejected the request due to its size",
            Self::UnsupportedMediaType => "the server was unable to handle the media type requested",
            Self::TooManyRequests => "the server has received too many requests and has asked us to try again later",
            Self::InternalError => "an error on the server has prevented the request from succeeding",
            Self::ServiceUnavailable => "the server is currently unable to handle the request",
            Self::Timeout => "the server was unable to return a response in the time allotted",
            Self::Expired => "the requested content has expired",
            Self::Unknown => "an error on the server has prevented the request from succeeding",
        }
    }
}

impl std::fmt::Display for StatusReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded failure status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Why the request failed.
    pub reason: StatusReason,
    /// Human readable description.
    pub message: String,
}

#[derive(Deserialize)]
struct WireStatus {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

impl Status {
    /// Classifies a non-2xx response.
    ///
    /// The body is decoded as a `Status` document when it is one; a missing
    /// reason or message is filled in from the status code.
    #[must_use]
    pub fn from_response(code: u16, method: HttpMethod, path: &str, body: &[u8]) -> Self {
        let wire = serde_json::from_slice::<WireStatus>(body)
            .ok()
            .filter(|w| w.kind.as_deref() == Some("Status") || w.reason.is_some());

        let (reason, message) = wire.map_or((None, None), |w| {
            let reason = w
                .reason
                .filter(|r| !r.is_empty())
                .map(|r| StatusReason::from_wire(&r));
            (reason, w.message.filter(|m| !m.is_empty()))
        });

        let reason = reason.unwrap_or_else(|| StatusReason::from_status_code(code));
        let message = message.unwrap_or_else(|| {
            format!(
                "{} ({} {})",
                reason.default_message(),
                method.to_string().to_lowercase(),
                path
            )
        });

        Self {
            code,
            reason,
            message,
        }
    }
}

/// Replaces the message of `error` with the raw response body when the
/// reason is one whose server detail matters to callers (bad request,
/// conflict, already exists). Other errors are returned unchanged.
///
/// ```rust
/// use kube_rest::clients::{enrich_status_error, Status, StatusError, StatusReason};
///
/// let error = StatusError::new(
///     Status { code: 409, reason: StatusReason::Conflict, message: "conflict".into() },
///     b"object was modified".to_vec(),
/// );
/// let body = error.body().to_vec();
/// let error = enrich_status_error(error, &body);
/// assert_eq!(error.to_string(), "object was modified");
/// ```
#[must_use]
pub fn enrich_status_error(mut error: StatusError, raw_body: &[u8]) -> StatusError {
    if error.status.reason.carries_server_detail() && !raw_body.is_empty() {
        error.status.message = String::from_utf8_lossy(raw_body).into_owned();
    }
    error
}
