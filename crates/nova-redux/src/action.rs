//! Action records and their constructors.
//!
//! Actions serialize to the shapes other clients of the container expect:
//!
//! ```text
//! {"type": "UPDATE", "reducer": "api", "tag": "load", "state": {...}}
//! {"type": "RESET",  "reducer": "api", "tag": "clear", "resetPaths": ["a.b", "c"]}
//! ```

use nova_state::{NovaError, NovaResult, ResetPaths};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Update,
    Reset,
}

impl ActionKind {
    /// Wire name of the action type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Update => "UPDATE",
            ActionKind::Reset => "RESET",
        }
    }

    /// Parse a wire name; anything else is not an action this crate handles.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UPDATE" => Some(ActionKind::Update),
            "RESET" => Some(ActionKind::Reset),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged record describing an intended state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Shallow-merge `state` into the reducer's state.
    Update {
        reducer: String,
        tag: String,
        state: Map<String, Value>,
    },
    /// Restore the listed paths to their initial values; an empty list
    /// restores everything.
    Reset {
        reducer: String,
        tag: String,
        #[serde(rename = "resetPaths")]
        reset_paths: ResetPaths,
    },
}

impl Action {
    /// Name of the reducer this action targets.
    pub fn reducer(&self) -> &str {
        match self {
            Action::Update { reducer, .. } | Action::Reset { reducer, .. } => reducer,
        }
    }

    /// Tag stamped onto the resulting state.
    pub fn tag(&self) -> &str {
        match self {
            Action::Update { tag, .. } | Action::Reset { tag, .. } => tag,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Update { .. } => ActionKind::Update,
            Action::Reset { .. } => ActionKind::Reset,
        }
    }
}

/// Build an update action.
///
/// ```
/// use nova_redux::update;
/// use serde_json::json;
///
/// let action = update("api", "load", json!({"test": true}).as_object().unwrap().clone());
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({"type": "UPDATE", "reducer": "api", "tag": "load", "state": {"test": true}})
/// );
/// ```
pub fn update(
    reducer: impl Into<String>,
    tag: impl Into<String>,
    state: Map<String, Value>,
) -> Action {
    Action::Update {
        reducer: reducer.into(),
        tag: tag.into(),
        state,
    }
}

/// Build a reset action from dotted path strings. No paths means total reset.
pub fn reset<I, S>(reducer: impl Into<String>, tag: impl Into<String>, paths: I) -> Action
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Action::Reset {
        reducer: reducer.into(),
        tag: tag.into(),
        reset_paths: ResetPaths::from_strs(paths),
    }
}

/// Build a reset action from a dynamic path list.
///
/// Fails with `InvalidArgument` when `paths` is not an array. Non-string
/// entries stay in the action, are skipped when it is reduced, and are
/// returned here as `InvalidPathType` diagnostics.
pub fn reset_from_value(
    reducer: impl Into<String>,
    tag: impl Into<String>,
    paths: &Value,
) -> NovaResult<(Action, Vec<NovaError>)> {
    let (reset_paths, skipped) = ResetPaths::from_value(paths)?;
    let action = Action::Reset {
        reducer: reducer.into(),
        tag: tag.into(),
        reset_paths,
    };
    Ok((action, skipped))
}

/// Read a required string field from an action payload.
pub(crate) fn required_str<'a>(action: &'a Map<String, Value>, field: &str) -> NovaResult<&'a str> {
    match action.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        other => Err(NovaError::expected(
            &format!("action.{field}"),
            "a string",
            other.unwrap_or(&Value::Null),
        )),
    }
}
