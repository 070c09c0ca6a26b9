//! Edits a reset or update plan is made of.
//!
//! A reset compiles to `Set` (restore an initial value) and `Delete` (drop a
//! key the initial state never had). An update is a single `MergeObject` at
//! the root.

use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One edit to a state document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Put `value` at `path`, replacing whatever subtree was there.
    ///
    /// Missing or non-object parents are replaced by objects.
    Set { path: Path, value: Value },

    /// Remove the key at `path`. Absent keys are left alone.
    Delete { path: Path },

    /// Copy the top-level entries of `value` into the object at `path`.
    ///
    /// Both sides must be objects; a missing or null target starts empty.
    MergeObject { path: Path, value: Value },
}

impl Op {
    #[inline]
    pub fn set(path: Path, value: impl Into<Value>) -> Self {
        Op::Set {
            path,
            value: value.into(),
        }
    }

    #[inline]
    pub fn delete(path: Path) -> Self {
        Op::Delete { path }
    }

    #[inline]
    pub fn merge_object(path: Path, value: impl Into<Value>) -> Self {
        Op::MergeObject {
            path,
            value: value.into(),
        }
    }
}
