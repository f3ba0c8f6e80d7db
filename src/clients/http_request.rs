//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! [`HttpMethod`] and [`PatchType`] enumerations used on the wire.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::options::Options;

/// HTTP methods issued by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET, used by get and list.
    Get,
    /// HTTP POST, used by create.
    Post,
    /// HTTP PUT, used by update.
    Put,
    /// HTTP PATCH, used by patch.
    Patch,
    /// HTTP DELETE, used by delete.
    Delete,
}

impl HttpMethod {
    /// Whether requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Partial-update conventions, transmitted as the request `Content-Type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchType {
    /// RFC 6902 JSON patch (a list of operations).
    Json,
    /// RFC 7396 JSON merge patch.
    Merge,
    /// Kubernetes strategic merge patch.
    StrategicMerge,
    /// Server-side apply of a full object.
    Apply,
}

impl PatchType {
    /// Returns the MIME type string for this patch type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json-patch+json",
            Self::Merge => "application/merge-patch+json",
            Self::StrategicMerge => "application/strategic-merge-patch+json",
            Self::Apply => "application/apply-patch+yaml",
        }
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_content_type())
    }
}

/// A request to be sent by [`HttpClient`](crate::clients::HttpClient).
///
/// ```rust
/// use kube_rest::clients::{HttpMethod, HttpRequest, Options};
///
/// let options = Options::new().param("dryRun", "All");
/// let request = HttpRequest::builder(HttpMethod::Post, "/test")
///     .body(br#"{"name":"a"}"#.to_vec())
///     .options(Some(&options))
///     .build()
///     .unwrap();
/// assert_eq!(request.path, "/test");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest<'a> {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute path for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<Vec<u8>>,
    /// Overrides the configured content type of the body.
    pub content_type: Option<&'static str>,
    /// Headers and query parameters to apply.
    pub options: Option<&'a Options>,
}

impl<'a> HttpRequest<'a> {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder<'a> {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - `http_method` is `Post`, `Put` or `Patch` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder<'a> {
    http_method: HttpMethod,
    path: String,
    body: Option<Vec<u8>>,
    content_type: Option<&'static str>,
    options: Option<&'a Options>,
}

impl<'a> HttpRequestBuilder<'a> {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            content_type: None,
            options: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Overrides the configured body content type.
    #[must_use]
    pub const fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Sets the headers and query parameters to apply.
    #[must_use]
    pub const fn options(mut self, options: Option<&'a Options>) -> Self {
        self.options = options;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest<'a>, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            content_type: self.content_type,
            options: self.options,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Post.as_reqwest(), reqwest::Method::POST);
        assert_eq!(HttpMethod::Put.as_reqwest(), reqwest::Method::PUT);
        assert_eq!(HttpMethod::Patch.as_reqwest(), reqwest::Method::PATCH);
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }

    #[test]
    fn test_patch_type_content_type() {
        assert_eq!(PatchType::Json.as_content_type(), "application/json-patch+json");
        assert_eq!(PatchType::Merge.as_content_type(), "application/merge-patch+json");
        assert_eq!(
            PatchType::StrategicMerge.as_content_type(),
            "application/strategic-merge-patch+json"
        );
        assert_eq!(PatchType::Apply.as_content_type(), "application/apply-patch+yaml");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/test/a")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/test/a");
        assert!(request.body.is_none());
        assert!(request.options.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_writes() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            let result = HttpRequest::builder(method, "/test").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { method: m }) if m == method.to_string()
            ));
        }
    }

    #[test]
    fn test_verify_allows_empty_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/test")
            .body(Vec::new())
            .build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_verify_requires_absolute_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "test").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { path }) if path == "test"
        ));
    }
}
