//! Path resolution and reset-to-initial transitions over JSON state.
//!
//! `nova-state` is the state half of a reducer-style container: it knows how to
//! restore parts of a state document to their initial values without touching
//! anything else.
//!
//! # Core Concepts
//!
//! - **Path**: dot-delimited key path such as `status.isFetching`
//! - **resolve**: longest prefix of a path that exists in the initial state
//! - **reset_state**: restore (or delete) each requested path in a copy of the
//!   current state
//! - **Patch**: ordered operations applied by the pure `apply_patch`
//!
//! # Reset semantics
//!
//! ```text
//! State' = apply_patch(State, plan_reset(Initial, Paths))
//! ```
//!
//! - A path whose deepest existing prefix is `p` restores the whole value at `p`
//! - A top-level key unknown to the initial state is deleted
//! - A multi-segment path with no existing prefix fails with `PathNotFound`
//! - An empty path list returns the initial state; a list whose entries are
//!   all non-strings changes nothing
//!
//! # Quick Start
//!
//! ```
//! use nova_state::{reset_state, ResetPaths};
//! use serde_json::json;
//!
//! let initial = json!({"status": {"isFetching": false}});
//! let current = json!({"status": {"isFetching": {"nested": true}, "another": true}});
//!
//! let paths = ResetPaths::from_strs(["status.isFetching.some.missing.leaf"]);
//! let next = reset_state(&initial, &current, &paths).unwrap();
//!
//! assert_eq!(next, json!({"status": {"isFetching": false, "another": true}}));
//! ```

mod apply;
mod error;
mod op;
mod patch;
mod path;
mod reset;
mod resolve;

pub use apply::{apply_patch, contains_path, get_at_path};
pub use error::{value_type_name, NovaError, NovaResult};
pub use op::Op;
pub use patch::Patch;
pub use path::{Path, SEPARATOR};
pub use reset::{
    plan_reset, reset_state, reset_state_with, MissingPathPolicy, ResetEntry, ResetPaths,
};
pub use resolve::{resolve, Resolution};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
