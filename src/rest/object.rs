//! Capability traits for values the CRUD client can move over the wire.
//!
//! The client never inspects an object's fields. It asks the object for its
//! addresses and its serialized form, and hands response bytes back to it.
//!
//! # Implementing an Object
//!
//! ```rust
//! use kube_rest::rest::{join_path, parse_json_into, to_json, CodecError, Object};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! struct ConfigMap {
//!     name: String,
//!     #[serde(default)]
//!     data: std::collections::BTreeMap<String, String>,
//! }
//!
//! impl Object for ConfigMap {
//!     fn type_link(&self, segments: &[&str]) -> String {
//!         join_path("/api/v1/namespaces/default/configmaps", segments)
//!     }
//!
//!     fn self_link(&self, segments: &[&str]) -> String {
//!         let mut all = vec![self.name.as_str()];
//!         all.extend_from_slice(segments);
//!         self.type_link(&all)
//!     }
//!
//!     fn data(&self) -> Result<Vec<u8>, CodecError> {
//!         to_json(self)
//!     }
//!
//!     fn parse(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
//!         parse_json_into(self, bytes)
//!     }
//! }
//!
//! let cm = ConfigMap { name: "settings".into(), ..Default::default() };
//! assert_eq!(cm.self_link(&[]), "/api/v1/namespaces/default/configmaps/settings");
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::rest::errors::CodecError;

/// A single addressable resource.
///
/// `parse` must replace the object's state wholesale, and must leave the
/// object untouched when the bytes cannot be decoded.
pub trait Object: Send + Sync {
    /// The collection address, with `segments` appended.
    fn type_link(&self, segments: &[&str]) -> String;

    /// This object's own address, with `segments` appended.
    fn self_link(&self, segments: &[&str]) -> String;

    /// Serializes the object for a request body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the object cannot be encoded.
    fn data(&self) -> Result<Vec<u8>, CodecError>;

    /// Replaces the object's state from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if `bytes` cannot be decoded.
    fn parse(&mut self, bytes: &[u8]) -> Result<(), CodecError>;
}

/// A collection of resources fetched in one call.
pub trait ObjectList: Send + Sync {
    /// The collection address.
    fn type_link(&self) -> String;

    /// Replaces the list's state from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if `bytes` cannot be decoded.
    fn parse(&mut self, bytes: &[u8]) -> Result<(), CodecError>;
}

/// Serializes `value` as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

/// Decodes `bytes` as JSON and replaces `target` with the result.
///
/// `target` is only written once decoding has succeeded.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if `bytes` is not a valid encoding of `T`.
pub fn parse_json_into<T: DeserializeOwned>(target: &mut T, bytes: &[u8]) -> Result<(), CodecError> {
    *target = serde_json::from_slice(bytes)?;
    Ok(())
}
