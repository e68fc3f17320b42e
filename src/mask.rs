//! Field mask computation for PATCH requests.
//!
//! APIs that accept partial updates take an `updateMask` listing the dotted
//! paths of every field the request intends to touch. The mask is derived
//! from the request object itself: every leaf contributes its path.

use serde_json::{Map, Value};

/// Compute the field mask paths for `object`.
///
/// Scalars, `null`s, arrays, and empty objects are leaves; nested objects
/// recurse with a dotted prefix.
pub fn field_masks(object: &Map<String, Value>) -> Vec<String> {
    field_masks_except(object, &[])
}

/// Like [`field_masks`], but any nested object whose full dotted path is in
/// `do_not_recurse_in` is treated as a leaf. Used for map-valued fields
/// (e.g. free-form labels) whose keys are data, not schema.
pub fn field_masks_except(object: &Map<String, Value>, do_not_recurse_in: &[&str]) -> Vec<String> {
    let mut masks = Vec::new();
    collect_masks(&mut Vec::new(), object, do_not_recurse_in, &mut masks);
    masks
}

fn collect_masks(
    prefix: &mut Vec<String>,
    object: &Map<String, Value>,
    do_not_recurse_in: &[&str],
    masks: &mut Vec<String>,
) {
    for (key, value) in object {
        prefix.push(key.clone());
        let path = prefix.join(".");
        match value {
            Value::Object(nested) if !nested.is_empty() && !do_not_recurse_in.contains(&path.as_str()) => {
                collect_masks(prefix, nested, do_not_recurse_in, masks);
            }
            _ => masks.push(path),
        }
        prefix.pop();
    }
}
