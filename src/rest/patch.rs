//! Patch strategies for [`RestClient::patch`](crate::rest::RestClient::patch).
//!
//! - [`ConstantPatch`]: precomputed bytes sent as-is
//! - [`MergeFromPatch`]: a merge patch diffed against a captured baseline
//! - [`ApplyPatch`]: the object's full serialization, for server-side apply
//!
//! # Example
//!
//! ```rust,ignore
//! use kube_rest::rest::merge_from;
//!
//! let patch = merge_from(&deployment);
//! deployment.spec.replicas = 3;
//! client.patch(&ctx, &mut deployment, &patch).await?;
//! ```

use crate::clients::PatchType;
use crate::rest::errors::CodecError;
use crate::rest::merge::create_merge_patch;
use crate::rest::object::Object;

/// A patch body and the convention it is written in.
pub trait Patch: Send + Sync {
    /// The convention, sent as the request `Content-Type`.
    fn patch_type(&self) -> PatchType;

    /// Produces the patch body for `obj`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the body cannot be produced.
    fn data(&self, obj: &dyn Object) -> Result<Vec<u8>, CodecError>;
}

/// A patch with fixed bytes, independent of the target object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantPatch {
    patch_type: PatchType,
    data: Vec<u8>,
}

impl ConstantPatch {
    /// Creates a patch that always sends `data` as `patch_type`.
    #[must_use]
    pub fn new(patch_type: PatchType, data: impl Into<Vec<u8>>) -> Self {
        Self {
            patch_type,
            data: data.into(),
        }
    }
}

impl Patch for ConstantPatch {
    fn patch_type(&self) -> PatchType {
        self.patch_type
    }

    fn data(&self, _obj: &dyn Object) -> Result<Vec<u8>, CodecError> {
        Ok(self.data.clone())
    }
}

/// A JSON merge patch from a baseline snapshot to the target object.
///
/// The baseline is cloned when the patch is built, so later edits to the
/// source object are part of the diff.
#[derive(Clone, Debug)]
pub struct MergeFromPatch<O> {
    from: O,
}

impl<O: Object + Clone> MergeFromPatch<O> {
    /// Captures `from` as the baseline.
    #[must_use]
    pub fn new(from: &O) -> Self {
        Self { from: from.clone() }
    }

    /// Returns the captured baseline.
    #[must_use]
    pub const fn baseline(&self) -> &O {
        &self.from
    }
}

impl<O: Object + Clone> Patch for MergeFromPatch<O> {
    fn patch_type(&self) -> PatchType {
        PatchType::Merge
    }

    fn data(&self, obj: &dyn Object) -> Result<Vec<u8>, CodecError> {
        let original = self.from.data()?;
        let modified = obj.data()?;
        create_merge_patch(&original, &modified)
    }
}

/// Shorthand for [`MergeFromPatch::new`].
#[must_use]
pub fn merge_from<O: Object + Clone>(from: &O) -> MergeFromPatch<O> {
    MergeFromPatch::new(from)
}

/// Sends the object's full serialization as an apply patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyPatch;

impl Patch for ApplyPatch {
    fn patch_type(&self) -> PatchType {
        PatchType::Apply
    }

    fn data(&self, obj: &dyn Object) -> Result<Vec<u8>, CodecError> {
        obj.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{join_path, parse_json_into, to_json};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Item {
        name: String,
        id: String,
    }

    impl Object for Item {
        fn type_link(&self, segments: &[&str]) -> String {
            join_path("/test", segments)
        }

        fn self_link(&self, segments: &[&str]) -> String {
            let mut all = vec![self.name.as_str()];
            all.extend_from_slice(segments);
            self.type_link(&all)
        }

        fn data(&self) -> Result<Vec<u8>, CodecError> {
            to_json(self)
        }

        fn parse(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
            parse_json_into(self, bytes)
        }
    }

    struct Unencodable;

    impl Object for Unencodable {
        fn type_link(&self, _segments: &[&str]) -> String {
            "/test".to_string()
        }

        fn self_link(&self, _segments: &[&str]) -> String {
            "/test/x".to_string()
        }

        fn data(&self) -> Result<Vec<u8>, CodecError> {
            Err(CodecError::Custom("cannot encode".to_string()))
        }

        fn parse(&mut self, _bytes: &[u8]) -> Result<(), CodecError> {
            Ok(())
        }
    }

    fn item(name: &str, id: &str) -> Item {
        Item {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_constant_patch_ignores_object() {
        let patch = ConstantPatch::new(PatchType::StrategicMerge, br#"{"id":"b1"}"#.to_vec());

        assert_eq!(patch.patch_type(), PatchType::StrategicMerge);
        assert_eq!(patch.data(&item("a", "b")).unwrap(), br#"{"id":"b1"}"#);
        assert_eq!(patch.data(&Unencodable).unwrap(), br#"{"id":"b1"}"#);
    }

    #[test]
    fn test_merge_from_diffs_against_baseline() {
        let mut target = item("a", "b");
        let patch = merge_from(&target);
        target.id = "b1".to_string();

        assert_eq!(patch.patch_type(), PatchType::Merge);
        assert_eq!(patch.data(&target).unwrap(), br#"{"id":"b1"}"#);
        assert_eq!(patch.baseline().id, "b");
    }

    #[test]
    fn test_merge_from_unchanged_object_is_empty() {
        let target = item("a", "b");
        assert_eq!(merge_from(&target).data(&target).unwrap(), b"{}");
    }

    #[test]
    fn test_merge_from_propagates_target_encoding_failure() {
        let patch = merge_from(&item("a", "b"));
        assert!(matches!(
            patch.data(&Unencodable),
            Err(CodecError::Custom(_))
        ));
    }

    #[test]
    fn test_apply_patch_sends_full_object() {
        let target = item("a", "b");

        assert_eq!(ApplyPatch.patch_type(), PatchType::Apply);
        assert_eq!(
            ApplyPatch.data(&target).unwrap(),
            br#"{"name":"a","id":"b"}"#
        );
    }
}
