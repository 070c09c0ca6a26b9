//! Ordered edit lists.
//!
//! [`plan_reset`](crate::plan_reset) emits one `Patch` per reset request and
//! [`apply_patch`](crate::apply_patch) runs it against a copy of the current
//! state.

use crate::Op;
use serde::{Deserialize, Serialize};

/// Edits applied in order to one state document.
///
/// When two edits touch overlapping paths the later one wins, which is how a
/// reset list like `["a.b", "a"]` ends with the whole of `a` restored.
///
/// # Examples
///
/// ```
/// use nova_state::{apply_patch, path, Op, Patch};
/// use serde_json::json;
///
/// let patch = Patch::new()
///     .with_op(Op::set(path!("status", "isFetching"), json!(false)))
///     .with_op(Op::delete(path!("test")));
///
/// let current = json!({"status": {"isFetching": true}, "test": true});
/// let next = apply_patch(&current, &patch).unwrap();
/// assert_eq!(next, json!({"status": {"isFetching": false}}));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_op(mut self, op: Op) -> Self {
        self.ops.push(op);
        self
    }

    #[inline]
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// True when applying this patch would return the state unchanged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}
