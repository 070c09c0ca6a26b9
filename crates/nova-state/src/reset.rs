//! Reset-to-initial transitions.
//!
//! Each requested path is resolved against the initial state with
//! [`resolve`](crate::resolve()) and turned into an operation:
//!
//! - a matched prefix restores its initial value (the whole matched subtree)
//! - an unmatched top-level key is deleted from the current state
//! - an unmatched multi-segment path aborts the reset with `PathNotFound`
//!
//! The operations are collected into one [`Patch`] and applied to a copy of
//! the current state, so a failure leaves nothing half-applied.

use crate::{apply_patch, resolve, NovaError, NovaResult, Op, Patch, Path, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do with a multi-segment path that has no prefix in the initial state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPathPolicy {
    /// Abort the whole reset with [`NovaError::PathNotFound`].
    #[default]
    Fail,
    /// Skip the path and log a warning.
    Ignore,
}

/// One entry of a reset request as it was received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResetEntry {
    Path(Path),
    /// Not a string. Kept so the request encodes back to what was sent, but
    /// never turned into an operation.
    Invalid(Value),
}

/// Ordered list of reset entries. Only a list with no entries at all
/// requests a total reset; a list whose entries are all invalid resets
/// nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetPaths(Vec<ResetEntry>);

impl ResetPaths {
    /// An empty list, which requests a total reset.
    #[inline]
    pub fn total() -> Self {
        Self(Vec::new())
    }

    /// Build from dotted path strings.
    pub fn from_strs<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            paths
                .into_iter()
                .map(|p| ResetEntry::Path(Path::parse(p.as_ref())))
                .collect(),
        )
    }

    /// Decode a dynamic reset path list.
    ///
    /// Fails with `InvalidArgument` when `value` is not an array. Entries that
    /// are not strings are kept as [`ResetEntry::Invalid`] and also returned
    /// as `InvalidPathType` diagnostics.
    pub fn from_value(value: &Value) -> NovaResult<(Self, Vec<NovaError>)> {
        let entries = value
            .as_array()
            .ok_or_else(|| NovaError::expected("reset paths", "an array", value))?;

        let paths = Self(
            entries
                .iter()
                .map(|entry| match entry {
                    Value::String(dotted) => ResetEntry::Path(Path::parse(dotted)),
                    other => ResetEntry::Invalid(other.clone()),
                })
                .collect(),
        );
        let skipped = paths.diagnostics();
        Ok((paths, skipped))
    }

    /// True when this list requests a total reset.
    #[inline]
    pub fn is_total(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[ResetEntry] {
        &self.0
    }

    /// The usable paths, in request order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().filter_map(|entry| match entry {
            ResetEntry::Path(path) => Some(path),
            ResetEntry::Invalid(_) => None,
        })
    }

    /// One `InvalidPathType` per entry that is not a string.
    pub fn diagnostics(&self) -> Vec<NovaError> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                ResetEntry::Invalid(found) => Some(NovaError::invalid_path_type(index, found)),
                ResetEntry::Path(_) => None,
            })
            .collect()
    }
}

/// Turn a partial reset request into a patch against the current state.
///
/// Operations keep the order of `paths`, so a later path wins wherever two
/// requests overlap. Invalid entries are skipped with a warning. A total
/// reset (empty list) yields an empty patch; use [`reset_state`] to get the
/// initial state back in that case.
pub fn plan_reset(
    initial: &Value,
    paths: &ResetPaths,
    policy: MissingPathPolicy,
) -> NovaResult<Patch> {
    let mut patch = Patch::new();
    for (index, entry) in paths.entries().iter().enumerate() {
        let path = match entry {
            ResetEntry::Path(path) => path,
            ResetEntry::Invalid(found) => {
                let err = NovaError::invalid_path_type(index, found);
                tracing::warn!(error = %err, "skipping reset path entry");
                continue;
            }
        };
        match resolve(initial, path) {
            Resolution::Found { path: matched, value } => {
                patch.push(Op::set(matched, value.clone()));
            }
            Resolution::NotFound if path.is_top_level() => {
                patch.push(Op::delete(path.clone()));
            }
            Resolution::NotFound => match policy {
                MissingPathPolicy::Fail => return Err(NovaError::path_not_found(path.clone())),
                MissingPathPolicy::Ignore => {
                    tracing::warn!(path = %path, "ignoring reset path with no initial value");
                }
            },
        }
    }
    Ok(patch)
}

/// Reset `current` toward `initial` along `paths`, failing on unknown paths.
///
/// Neither input is modified. An empty `paths` list returns a copy of
/// `initial`; a list with nothing usable in it returns a copy of `current`.
///
/// # Examples
///
/// ```
/// use nova_state::{reset_state, ResetPaths};
/// use serde_json::json;
///
/// let initial = json!({"status": {"isFetching": false}});
/// let current = json!({"status": {"isFetching": true}, "test": true});
///
/// let next = reset_state(&initial, &current, &ResetPaths::from_strs(["test"])).unwrap();
/// assert_eq!(next, json!({"status": {"isFetching": true}}));
///
/// let next = reset_state(&initial, &current, &ResetPaths::total()).unwrap();
/// assert_eq!(next, initial);
/// ```
pub fn reset_state(initial: &Value, current: &Value, paths: &ResetPaths) -> NovaResult<Value> {
    reset_state_with(initial, current, paths, MissingPathPolicy::default())
}

/// [`reset_state`] with an explicit policy for unresolvable paths.
pub fn reset_state_with(
    initial: &Value,
    current: &Value,
    paths: &ResetPaths,
    policy: MissingPathPolicy,
) -> NovaResult<Value> {
    if paths.is_total() {
        tracing::debug!("total reset to initial state");
        return Ok(initial.clone());
    }

    let patch = plan_reset(initial, paths, policy)?;
    tracing::debug!(
        entries = paths.entries().len(),
        ops = patch.len(),
        "partial reset planned"
    );
    if patch.is_empty() {
        return Ok(current.clone());
    }
    apply_patch(current, &patch)
}
