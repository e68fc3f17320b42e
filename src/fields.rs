//! Conditional field transfer between wire-format JSON objects.
//!
//! Wire objects are `serde_json::Map`s with optional fields. A field is
//! "present" when its key exists in the map; a JSON `null` counts as a
//! present value and is transferred like any other. When a field is absent
//! the destination is left completely untouched, not even a placeholder key
//! is written.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Copy `field` from `src` to the same-named key on `dest` if it is present.
pub fn copy_if_present(dest: &mut Map<String, Value>, src: &Map<String, Value>, field: &str) {
    if let Some(value) = src.get(field) {
        dest.insert(field.to_string(), value.clone());
    }
}

/// Like [`copy_if_present`], applying `transform` to the value before writing.
pub fn copy_if_present_with<F>(
    dest: &mut Map<String, Value>,
    src: &Map<String, Value>,
    field: &str,
    transform: F,
) where
    F: FnOnce(&Value) -> Value,
{
    if let Some(value) = src.get(field) {
        dest.insert(field.to_string(), transform(value));
    }
}

/// Copy `src_field` from `src` to `dest_field` on `dest` if it is present,
/// translating between differently-named schemas.
pub fn rename_if_present(
    dest: &mut Map<String, Value>,
    src: &Map<String, Value>,
    dest_field: &str,
    src_field: &str,
) {
    if let Some(value) = src.get(src_field) {
        dest.insert(dest_field.to_string(), value.clone());
    }
}

/// Like [`rename_if_present`], applying `transform` to the value before writing.
pub fn rename_if_present_with<F>(
    dest: &mut Map<String, Value>,
    src: &Map<String, Value>,
    dest_field: &str,
    src_field: &str,
    transform: F,
) where
    F: FnOnce(&Value) -> Value,
{
    if let Some(value) = src.get(src_field) {
        dest.insert(dest_field.to_string(), transform(value));
    }
}

/// Recursively remove `null` entries from a wire object before sending.
///
/// Null-valued keys are dropped from objects at every depth, including
/// objects nested inside arrays. Null *elements* of arrays are kept, since
/// their position is meaningful in JSON.
pub fn prune_nulls(object: &mut Map<String, Value>) {
    object.retain(|_, value| !value.is_null());
    for value in object.values_mut() {
        prune_nulls_in(value);
    }
}

fn prune_nulls_in(value: &mut Value) {
    match value {
        Value::Object(map) => prune_nulls(map),
        Value::Array(items) => {
            for item in items {
                prune_nulls_in(item);
            }
        }
        _ => {}
    }
}

/// Verify that at most one member of a oneof group is present on `object`.
///
/// `typename` and `oneof` only label the error message. Zero present members
/// is fine; absent fields are never an error.
pub fn assert_one_of(
    typename: &str,
    object: &Map<String, Value>,
    oneof: &str,
    fields: &[&str],
) -> Result<()> {
    let set: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| object.contains_key(*field))
        .collect();
    if set.len() > 1 {
        return Err(Error::OneOfViolation {
            typename: typename.to_string(),
            oneof: oneof.to_string(),
            fields: fields.join(", "),
            set: set.join(", "),
        });
    }
    Ok(())
}
