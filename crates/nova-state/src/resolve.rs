//! Longest-prefix resolution of a path against the initial state.
//!
//! A reset request names a location such as `status.isFetching.deep.leaf`.
//! The initial state may only know `status.isFetching`; in that case the whole
//! `status.isFetching` subtree is what gets restored. [`resolve`] finds that
//! deepest defined prefix.

use crate::{get_at_path, Path};
use serde_json::Value;

/// Outcome of resolving a path against a reference document.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// The longest prefix of the requested path that exists, with the value
    /// stored there.
    Found {
        /// Matched sub-path; a prefix of (or equal to) the requested path.
        path: Path,
        /// Value at `path`, borrowed from the reference document.
        value: &'a Value,
    },
    /// No non-empty prefix of the path exists.
    NotFound,
}

impl<'a> Resolution<'a> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// The matched sub-path, if any.
    pub fn matched_path(&self) -> Option<&Path> {
        match self {
            Resolution::Found { path, .. } => Some(path),
            Resolution::NotFound => None,
        }
    }
}

/// Find the longest prefix of `path` that is a defined location in `initial`.
///
/// Prefixes are tried from the full path toward the root, stopping before the
/// empty path. Existence is key presence, so a stored `false` or `null` is a
/// match.
///
/// # Examples
///
/// ```
/// use nova_state::{resolve, path, Resolution};
/// use serde_json::json;
///
/// let initial = json!({"status": {"isFetching": false}});
///
/// let found = resolve(&initial, &path!("status", "isFetching", "some", "leaf"));
/// assert_eq!(
///     found,
///     Resolution::Found { path: path!("status", "isFetching"), value: &json!(false) }
/// );
///
/// assert_eq!(resolve(&initial, &path!("wrong", "path")), Resolution::NotFound);
/// ```
pub fn resolve<'a>(initial: &'a Value, path: &Path) -> Resolution<'a> {
    for prefix in path.prefixes() {
        if let Some(value) = get_at_path(initial, &prefix) {
            tracing::trace!(requested = %path, matched = %prefix, "resolved reset path");
            return Resolution::Found {
                path: prefix,
                value,
            };
        }
    }
    Resolution::NotFound
}
