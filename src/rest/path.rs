//! Path building for object addresses.
//!
//! [`join_path`] composes a collection address with extra segments, the
//! way an [`Object`](crate::rest::Object) typically derives its self address
//! from its type address and identifying field.
//!
//! # Example
//!
//! ```rust
//! use kube_rest::rest::join_path;
//!
//! assert_eq!(join_path("/apis/v1/", &["pods", "web-0"]), "/apis/v1/pods/web-0");
//! assert_eq!(join_path("/test", &["", "a"]), "/test/a");
//! ```

/// Joins `base` and `segments` with `/` and cleans the result.
///
/// Empty segments are dropped, repeated slashes collapse, `.` segments are
/// removed and `..` removes the preceding segment. A leading slash on `base`
/// is kept; a trailing slash is not.
#[must_use]
pub fn join_path(base: &str, segments: &[&str]) -> String {
    let rooted = base.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for piece in std::iter::once(base).chain(segments.iter().copied()) {
        for part in piece.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    if parts.last().is_some_and(|p| *p != "..") {
                        parts.pop();
                    } else if !rooted {
                        parts.push("..");
                    }
                }
                _ => parts.push(part),
            }
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() && (!base.is_empty() || segments.iter().any(|s| !s.is_empty())) {
        ".".to_string()
    } else {
        joined
    }
}
