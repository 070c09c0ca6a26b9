//! Error types for nova-state operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for nova-state operations.
pub type NovaResult<T> = Result<T, NovaError>;

/// Errors that can occur during nova-state operations.
#[derive(Debug, Error)]
pub enum NovaError {
    /// No prefix of a multi-segment path exists in the initial state.
    #[error("provided path does not exist: {path}")]
    PathNotFound {
        /// The path as requested.
        path: Path,
    },

    /// A reset path entry was not a string.
    ///
    /// Reported per entry; the entry is skipped and the others still apply.
    #[error("expected reset path #{index} to be a string, found {found}")]
    InvalidPathType {
        /// Position of the entry in the reset path list.
        index: usize,
        /// JSON type of the offending entry.
        found: &'static str,
    },

    /// An input had the wrong shape.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },

    /// Merge operation requires an object value.
    #[error("merge requires object value at {path}")]
    MergeRequiresObject {
        /// The path where a non-object was found.
        path: Path,
    },
}

impl NovaError {
    /// Create a path not found error.
    #[inline]
    pub fn path_not_found(path: Path) -> Self {
        NovaError::PathNotFound { path }
    }

    /// Create an invalid path type error for the entry at `index`.
    #[inline]
    pub fn invalid_path_type(index: usize, found: &serde_json::Value) -> Self {
        NovaError::InvalidPathType {
            index,
            found: value_type_name(found),
        }
    }

    /// Create an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NovaError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a merge requires object error.
    #[inline]
    pub fn merge_requires_object(path: Path) -> Self {
        NovaError::MergeRequiresObject { path }
    }

    /// Build an `InvalidArgument` for a value of the wrong JSON type.
    pub fn expected(what: &str, expected: &str, found: &serde_json::Value) -> Self {
        NovaError::invalid_argument(format!(
            "expected {what} to be {expected}, found {}",
            value_type_name(found)
        ))
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
