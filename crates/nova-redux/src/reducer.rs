//! Named reducers.
//!
//! A [`Reducer`] owns the initial state of one slice and turns
//! `(state, action)` into the next state. Actions addressed to another
//! reducer, and action types it does not know, leave the state as it was.

use crate::action::required_str;
use crate::{Action, ActionKind, ReducerConfig};
use nova_state::{
    apply_patch, reset_state_with, NovaError, NovaResult, Op, Patch, Path, ResetPaths,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Result of reducing a dynamic action payload.
#[derive(Debug)]
pub struct Transition {
    /// The next state.
    pub state: Value,
    /// The decoded action, or `None` when the action was not handled.
    pub action: Option<Action>,
    /// Reset path entries that were not strings. They are skipped when
    /// reducing but do not turn the request into a total reset.
    pub diagnostics: Vec<NovaError>,
}

impl Transition {
    fn unchanged(state: &Value) -> Self {
        Self {
            state: state.clone(),
            action: None,
            diagnostics: Vec::new(),
        }
    }

    /// True when the action targeted this reducer and was applied.
    #[inline]
    pub fn handled(&self) -> bool {
        self.action.is_some()
    }
}

/// A pure `(state, action) -> state` function identified by name.
///
/// The initial state is shared, never mutated, and can be read from any
/// number of threads; cloning a reducer is cheap.
///
/// # Examples
///
/// ```
/// use nova_redux::{reset, update, Reducer};
/// use serde_json::json;
///
/// let api = Reducer::new("api", json!({"status": {"isFetching": false}})).unwrap();
///
/// let patch = json!({"test": true}).as_object().unwrap().clone();
/// let state = api.init(&update("api", "test", patch)).unwrap();
/// assert_eq!(state, json!({"status": {"isFetching": false}, "test": true, "_lastAction": "test"}));
///
/// let state = api.reduce(&state, &reset("api", "resetTest", ["test"])).unwrap();
/// assert_eq!(state, json!({"status": {"isFetching": false}, "_lastAction": "resetTest"}));
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    name: String,
    initial: Arc<Value>,
    config: ReducerConfig,
}

impl Reducer {
    /// Create a reducer. Fails with `InvalidArgument` unless `initial` is an object.
    pub fn new(name: impl Into<String>, initial: Value) -> NovaResult<Self> {
        if !initial.is_object() {
            return Err(NovaError::expected("initialState", "an object", &initial));
        }
        Ok(Self {
            name: name.into(),
            initial: Arc::new(initial),
            config: ReducerConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: ReducerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &Value {
        &self.initial
    }

    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Reduce starting from the initial state.
    pub fn init(&self, action: &Action) -> NovaResult<Value> {
        self.reduce(&self.initial, action)
    }

    /// Compute the next state for `action`.
    ///
    /// Fails with `InvalidArgument` when `state` is not an object, and with
    /// `PathNotFound` when a reset names a deep path the initial state lacks.
    /// On failure no state is produced.
    pub fn reduce(&self, state: &Value, action: &Action) -> NovaResult<Value> {
        if !state.is_object() {
            return Err(NovaError::expected("state", "an object", state));
        }
        if action.reducer() != self.name {
            tracing::trace!(
                reducer = %self.name,
                addressed_to = action.reducer(),
                "action for another reducer"
            );
            return Ok(state.clone());
        }

        let next = match action {
            Action::Update { state: patch, .. } => {
                let patch = Patch::new().with_op(Op::merge_object(
                    Path::root(),
                    Value::Object(patch.clone()),
                ));
                apply_patch(state, &patch)?
            }
            Action::Reset { reset_paths, .. } => {
                reset_state_with(&self.initial, state, reset_paths, self.config.missing_path)?
            }
        };

        tracing::debug!(
            reducer = %self.name,
            kind = %action.kind(),
            tag = action.tag(),
            "action reduced"
        );
        Ok(self.stamp(next, action.tag()))
    }

    /// Reduce an action payload whose shape is not yet known.
    ///
    /// Fails with `InvalidArgument` when `state` or `action` is not an object,
    /// or when a handled action lacks a string `tag`, an object `state`
    /// (UPDATE) or an array `resetPaths` (RESET). Non-string reset paths are
    /// skipped and reported in [`Transition::diagnostics`].
    pub fn reduce_value(&self, state: &Value, action: &Value) -> NovaResult<Transition> {
        if !state.is_object() {
            return Err(NovaError::expected("state", "an object", state));
        }
        let fields = action
            .as_object()
            .ok_or_else(|| NovaError::expected("action", "an object", action))?;

        let Some(kind) = fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(ActionKind::parse)
        else {
            return Ok(Transition::unchanged(state));
        };
        if fields.get("reducer").and_then(Value::as_str) != Some(self.name.as_str()) {
            return Ok(Transition::unchanged(state));
        }

        let (action, diagnostics) = self.decode(kind, fields)?;
        let state = self.reduce(state, &action)?;
        Ok(Transition {
            state,
            action: Some(action),
            diagnostics,
        })
    }

    fn decode(
        &self,
        kind: ActionKind,
        fields: &Map<String, Value>,
    ) -> NovaResult<(Action, Vec<NovaError>)> {
        let tag = required_str(fields, "tag")?.to_string();
        let reducer = self.name.clone();
        match kind {
            ActionKind::Update => {
                let state = match fields.get("state") {
                    Some(Value::Object(patch)) => patch.clone(),
                    other => {
                        return Err(NovaError::expected(
                            "action.state",
                            "an object",
                            other.unwrap_or(&Value::Null),
                        ))
                    }
                };
                Ok((Action::Update { reducer, tag, state }, Vec::new()))
            }
            ActionKind::Reset => {
                let (reset_paths, skipped) =
                    ResetPaths::from_value(fields.get("resetPaths").unwrap_or(&Value::Null))?;
                Ok((
                    Action::Reset {
                        reducer,
                        tag,
                        reset_paths,
                    },
                    skipped,
                ))
            }
        }
    }

    fn stamp(&self, mut state: Value, tag: &str) -> Value {
        if let Value::Object(obj) = &mut state {
            obj.insert(self.config.stamp_key.clone(), Value::String(tag.to_string()));
        }
        state
    }
}
