//! Per-call request options.
//!
//! [`Options`] is a bag of headers and query parameters that applies itself
//! onto an outgoing request through [`ApplyToRequest`]. An absent
//! `Option<&Options>` applies as a no-op.

use std::collections::HashMap;

use reqwest::RequestBuilder;

/// Something that can add itself onto an outgoing request.
pub trait ApplyToRequest {
    /// Adds headers and query parameters to `request`.
    fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Headers and query parameters for a single call.
///
/// Headers are multi-valued; every value is sent. Query parameters are
/// single-valued.
///
/// ```rust
/// use kube_rest::clients::Options;
///
/// let options = Options::new()
///     .header("Accept", "application/json")
///     .param("labelSelector", "app=web");
/// assert!(options.has_header("accept"));
/// assert_eq!(options.params.get("labelSelector").map(String::as_str), Some("app=web"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Header values by header name.
    pub header: HashMap<String, Vec<String>>,
    /// Query parameters by key.
    pub params: HashMap<String, String>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key`.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Sets the query parameter `key`, replacing any previous value.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Whether a header named `name` is present, ignoring ASCII case.
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.header
            .iter()
            .any(|(key, values)| key.eq_ignore_ascii_case(name) && !values.is_empty())
    }
}

impl ApplyToRequest for Options {
    fn apply_to_request(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, values) in &self.header {
            for value in values {
                request = request.header(key.as_str(), value.as_str());
            }
        }
        if !self.params.is_empty() {
            request = request.query(&self.params);
        }
        request
    }
}

impl ApplyToRequest for Option<&Options> {
    fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Some(options) => options.apply_to_request(request),
            None => request,
        }
    }
}
