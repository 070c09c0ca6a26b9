//! Patch application logic.
//!
//! This module contains the pure `apply_patch` function that applies a patch
//! to a state document and returns a new document.

use crate::{error::NovaResult, NovaError, Op, Patch, Path};
use serde_json::{Map, Value};

/// Apply a patch to a state document (pure function).
///
/// The input is never modified; the returned document is structurally
/// independent of it.
///
/// # Examples
///
/// ```
/// use nova_state::{apply_patch, Patch, Op, path};
/// use serde_json::json;
///
/// let doc = json!({"status": {"isFetching": true}, "test": true});
/// let patch = Patch::new()
///     .with_op(Op::set(path!("status", "isFetching"), json!(false)))
///     .with_op(Op::delete(path!("test")));
///
/// let new_doc = apply_patch(&doc, &patch).unwrap();
/// assert_eq!(new_doc, json!({"status": {"isFetching": false}}));
///
/// // Original is unchanged (pure function)
/// assert_eq!(doc["test"], true);
/// ```
pub fn apply_patch(doc: &Value, patch: &Patch) -> NovaResult<Value> {
    let mut result = doc.clone();

    for op in patch.ops() {
        apply_op(&mut result, op)?;
    }

    Ok(result)
}

/// Apply a single operation to a document (mutating).
pub(crate) fn apply_op(doc: &mut Value, op: &Op) -> NovaResult<()> {
    match op {
        Op::Set { path, value } => {
            set_at_path(doc, path.segments(), value.clone());
            Ok(())
        }
        Op::Delete { path } => {
            delete_at_path(doc, path.segments());
            Ok(())
        }
        Op::MergeObject { path, value } => apply_merge_object(doc, path, value),
    }
}

/// Replace `current` with an empty object unless it already is one.
fn ensure_object(current: &mut Value) -> &mut Map<String, Value> {
    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(obj) => obj,
        _ => unreachable!("value was just replaced with an object"),
    }
}

/// Recursively set a value at a path, creating intermediate objects as needed.
fn set_at_path(current: &mut Value, segments: &[String], value: Value) {
    match segments {
        [] => *current = value,
        [key] => {
            ensure_object(current).insert(key.clone(), value);
        }
        [key, rest @ ..] => {
            let entry = ensure_object(current)
                .entry(key.clone())
                .or_insert(Value::Null);
            set_at_path(entry, rest, value);
        }
    }
}

/// Try to delete a value at a path. Returns true if deleted, false if not found.
fn delete_at_path(current: &mut Value, segments: &[String]) -> bool {
    match segments {
        [] => false,
        [key] => current
            .as_object_mut()
            .is_some_and(|obj| obj.remove(key).is_some()),
        [key, rest @ ..] => current
            .as_object_mut()
            .and_then(|obj| obj.get_mut(key))
            .is_some_and(|child| delete_at_path(child, rest)),
    }
}

/// Apply a MergeObject operation.
fn apply_merge_object(doc: &mut Value, path: &Path, value: &Value) -> NovaResult<()> {
    let merge_value = value
        .as_object()
        .ok_or_else(|| NovaError::merge_requires_object(path.clone()))?;

    let mut target = doc;
    for key in path.segments() {
        target = ensure_object(target)
            .entry(key.clone())
            .or_insert(Value::Null);
    }
    if target.is_null() {
        *target = Value::Object(Map::new());
    }

    match target {
        Value::Object(obj) => {
            for (k, v) in merge_value {
                obj.insert(k.clone(), v.clone());
            }
            Ok(())
        }
        _ => Err(NovaError::merge_requires_object(path.clone())),
    }
}

/// Get a reference to a value at a path (for reading).
///
/// Existence is decided by key presence: a stored `null` or `false` is found.
/// Every intermediate value must be an object.
pub fn get_at_path<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter()
        .try_fold(doc, |current, key| current.as_object()?.get(key))
}

/// Check whether `path` is a defined location in `doc`.
#[inline]
pub fn contains_path(doc: &Value, path: &Path) -> bool {
    get_at_path(doc, path).is_some()
}
