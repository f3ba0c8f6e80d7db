//! JSON merge patch (RFC 7396) computation.

use serde_json::{Map, Value};

use crate::rest::errors::CodecError;

/// Computes the merge patch that turns `original` into `modified`.
///
/// Both documents must be JSON objects. Keys missing from `modified` map to
/// `null`, nested objects are diffed recursively, and every other changed
/// value (arrays included) is replaced wholesale. Unchanged keys are left
/// out, so identical documents produce `{}`.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if either document is not valid JSON and
/// [`CodecError::NotAnObject`] if either is not a JSON object.
///
/// # Example
///
/// ```rust
/// use kube_rest::rest::create_merge_patch;
///
/// let patch = create_merge_patch(br#"{"a":"b","c":"d"}"#, br#"{"a":"b"}"#).unwrap();
/// assert_eq!(patch, br#"{"c":null}"#);
/// ```
pub fn create_merge_patch(original: &[u8], modified: &[u8]) -> Result<Vec<u8>, CodecError> {
    let Value::Object(original) = serde_json::from_slice(original)? else {
        return Err(CodecError::NotAnObject {
            document: "original",
        });
    };
    let Value::Object(modified) = serde_json::from_slice(modified)? else {
        return Err(CodecError::NotAnObject {
            document: "modified",
        });
    };

    Ok(serde_json::to_vec(&Value::Object(diff_objects(
        &original, &modified,
    )))?)
}

fn diff_objects(original: &Map<String, Value>, modified: &Map<String, Value>) -> Map<String, Value> {
    let mut patch = Map::new();

    for key in original.keys() {
        if !modified.contains_key(key) {
            patch.insert(key.clone(), Value::Null);
        }
    }

    for (key, new) in modified {
        match (original.get(key), new) {
            (Some(old), _) if old == new => {}
            (Some(Value::Object(old)), Value::Object(new)) => {
                patch.insert(key.clone(), Value::Object(diff_objects(old, new)));
            }
            _ => {
                patch.insert(key.clone(), new.clone());
            }
        }
    }

    patch
}
