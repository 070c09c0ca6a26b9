//! Store holding the state slices of several named reducers.
//!
//! The root state is an object keyed by reducer name. Every action is routed
//! to the reducer it names, that reducer's slice is replaced, and the action
//! is recorded so the current state can be recomputed by replay.
//!
//! Transitions take `&mut self`: a store has a single writer and
//! at most one transition in flight. Wrap it in a lock to share it.

use crate::{Action, Reducer, StoreConfig};
use nova_state::NovaError;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, VecDeque};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to reduce action: {0}")]
    Reduce(#[from] NovaError),

    #[error("no reducer registered under name: {0}")]
    UnknownReducer(String),

    #[error("reducer already registered: {0}")]
    DuplicateReducer(String),
}

/// Container that serialises transitions across named reducers.
///
/// # Example
///
/// ```
/// use nova_redux::{reset, update, Reducer, Store};
/// use serde_json::json;
///
/// let mut store = Store::new();
/// store.register(Reducer::new("api", json!({"status": {"isFetching": false}})).unwrap()).unwrap();
///
/// let patch = json!({"test": true}).as_object().unwrap().clone();
/// store.dispatch(&update("api", "load", patch)).unwrap();
/// store.dispatch(&reset("api", "clear", ["test"])).unwrap();
///
/// assert_eq!(
///     store.slice("api"),
///     Some(&json!({"status": {"isFetching": false}, "_lastAction": "clear"}))
/// );
/// assert_eq!(store.replay().unwrap(), *store.state());
/// ```
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    reducers: BTreeMap<String, Reducer>,
    state: Value,
    /// State before the oldest recorded action.
    base: Value,
    history: VecDeque<Action>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            reducers: BTreeMap::new(),
            state: Value::Object(Map::new()),
            base: Value::Object(Map::new()),
            history: VecDeque::new(),
        }
    }

    /// Register a reducer; its slice starts at the reducer's initial state.
    pub fn register(&mut self, reducer: Reducer) -> Result<(), StoreError> {
        let name = reducer.name().to_string();
        if self.reducers.contains_key(&name) {
            return Err(StoreError::DuplicateReducer(name));
        }
        let initial = reducer.initial_state().clone();
        set_slice(&mut self.state, &name, initial.clone());
        set_slice(&mut self.base, &name, initial);
        tracing::debug!(reducer = %name, "reducer registered");
        self.reducers.insert(name, reducer);
        Ok(())
    }

    /// Apply `action` to the slice of the reducer it names.
    ///
    /// On error the store is left untouched.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), StoreError> {
        let next = self.reduce_slice(&self.state, action)?;
        self.commit(action.clone(), next)
    }

    /// Apply an action payload whose shape is not yet known.
    ///
    /// Returns the reset path entries that were skipped because they were
    /// not strings. Payloads the target reducer does not handle are not
    /// recorded.
    pub fn dispatch_value(&mut self, action: &Value) -> Result<Vec<NovaError>, StoreError> {
        let fields = action
            .as_object()
            .ok_or_else(|| NovaError::expected("action", "an object", action))?;
        let name = fields
            .get("reducer")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                NovaError::expected(
                    "action.reducer",
                    "a string",
                    fields.get("reducer").unwrap_or(&Value::Null),
                )
            })?;
        let reducer = self.reducer(name)?;

        let current = slice_of(&self.state, name);
        let transition = reducer.reduce_value(current, action)?;
        if let Some(decoded) = transition.action {
            self.commit(decoded, transition.state)?;
        }
        Ok(transition.diagnostics)
    }

    /// The root state, keyed by reducer name.
    pub fn state(&self) -> &Value {
        &self.state
    }

    /// The slice owned by reducer `name`.
    pub fn slice(&self, name: &str) -> Option<&Value> {
        self.state.get(name)
    }

    /// Recorded actions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Action> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recompute the root state from the replay base and the recorded actions.
    pub fn replay(&self) -> Result<Value, StoreError> {
        let mut state = self.base.clone();
        for action in &self.history {
            let next = self.reduce_slice(&state, action)?;
            set_slice(&mut state, action.reducer(), next);
        }
        Ok(state)
    }

    fn reducer(&self, name: &str) -> Result<&Reducer, StoreError> {
        self.reducers
            .get(name)
            .ok_or_else(|| StoreError::UnknownReducer(name.to_string()))
    }

    fn reduce_slice(&self, root: &Value, action: &Action) -> Result<Value, StoreError> {
        let reducer = self.reducer(action.reducer())?;
        Ok(reducer.reduce(slice_of(root, reducer.name()), action)?)
    }

    fn commit(&mut self, action: Action, next: Value) -> Result<(), StoreError> {
        // Fold the evicted action into the base before touching anything.
        let mut evicted = None;
        if self.history.len() >= self.config.history_limit {
            let oldest = match self.history.front() {
                Some(oldest) => oldest,
                None => &action,
            };
            let folded = self.reduce_slice(&self.base, oldest)?;
            evicted = Some((oldest.reducer().to_string(), folded));
        }

        if let Some((name, folded)) = evicted {
            set_slice(&mut self.base, &name, folded);
            self.history.pop_front();
        }
        set_slice(&mut self.state, action.reducer(), next);
        tracing::debug!(
            reducer = action.reducer(),
            tag = action.tag(),
            "transition committed"
        );
        if self.config.history_limit > 0 {
            self.history.push_back(action);
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn slice_of<'a>(root: &'a Value, name: &str) -> &'a Value {
    static EMPTY: Value = Value::Null;
    root.get(name).unwrap_or(&EMPTY)
}

fn set_slice(root: &mut Value, name: &str, slice: Value) {
    if let Value::Object(obj) = root {
        obj.insert(name.to_string(), slice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reset, update};
    use serde_json::json;

    fn store(limit: usize) -> Store {
        let mut store = Store::with_config(StoreConfig::default().with_history_limit(limit));
        store
            .register(Reducer::new("api", json!({"status": {"isFetching": false}})).unwrap())
            .unwrap();
        store
            .register(Reducer::new("ui", json!({"open": false})).unwrap())
            .unwrap();
        store
    }

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut store = store(8);
        let err = store
            .register(Reducer::new("api", json!({})).unwrap())
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateReducer(name) if name == "api"));
    }

    #[test]
    fn test_dispatch_routes_by_reducer_name() {
        let mut store = store(8);
        store.dispatch(&update("ui", "open", obj(json!({"open": true})))).unwrap();
        assert_eq!(
            store.state(),
            &json!({
                "api": {"status": {"isFetching": false}},
                "ui": {"open": true, "_lastAction": "open"},
            })
        );
    }

    #[test]
    fn test_dispatch_unknown_reducer() {
        let mut store = store(8);
        let err = store.dispatch(&reset("nope", "t", ["a"])).unwrap_err();
        assert!(matches!(err, StoreError::UnknownReducer(name) if name == "nope"));
        assert_eq!(store.history_len(), 0);
    }

    #[test]
    fn test_failed_dispatch_leaves_store_untouched() {
        let mut store = store(8);
        store.dispatch(&update("api", "a", obj(json!({"test": true})))).unwrap();
        let before = store.state().clone();

        let err = store.dispatch(&reset("api", "bad", ["wrong.path"])).unwrap_err();
        assert!(matches!(err, StoreError::Reduce(NovaError::PathNotFound { .. })));
        assert_eq!(store.state(), &before);
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn test_dispatch_value_reports_diagnostics() {
        let mut store = store(8);
        store.dispatch(&update("api", "a", obj(json!({"test": true})))).unwrap();

        let skipped = store
            .dispatch_value(&json!({
                "type": "RESET",
                "reducer": "api",
                "tag": "clear",
                "resetPaths": [true, "test"],
            }))
            .unwrap();
        assert_eq!(skipped.len(), 1);
        assert_eq!(
            store.slice("api"),
            Some(&json!({"status": {"isFetching": false}, "_lastAction": "clear"}))
        );
        let recorded = serde_json::to_value(store.history().last().unwrap()).unwrap();
        assert_eq!(recorded["resetPaths"], json!([true, "test"]));
        assert_eq!(store.replay().unwrap(), *store.state());
    }

    #[test]
    fn test_dispatch_value_with_only_invalid_paths_keeps_slice() {
        let mut store = store(8);
        store.dispatch(&update("api", "a", obj(json!({"test": true})))).unwrap();

        let skipped = store
            .dispatch_value(&json!({
                "type": "RESET",
                "reducer": "api",
                "tag": "noop",
                "resetPaths": [42],
            }))
            .unwrap();
        assert_eq!(skipped.len(), 1);
        assert_eq!(
            store.slice("api"),
            Some(&json!({"status": {"isFetching": false}, "test": true, "_lastAction": "noop"}))
        );
        assert_eq!(store.replay().unwrap(), *store.state());
    }

    #[test]
    fn test_dispatch_value_unhandled_is_not_recorded() {
        let mut store = store(8);
        let skipped = store
            .dispatch_value(&json!({"type": "SOMETHING", "reducer": "api"}))
            .unwrap();
        assert!(skipped.is_empty());
        assert_eq!(store.history_len(), 0);
    }

    #[test]
    fn test_replay_matches_state_after_eviction() {
        let mut store = store(2);
        store.dispatch(&update("api", "a", obj(json!({"x": 1})))).unwrap();
        store.dispatch(&update("ui", "b", obj(json!({"open": true})))).unwrap();
        store.dispatch(&reset("api", "c", ["x"])).unwrap();
        store.dispatch(&update("api", "d", obj(json!({"y": 2})))).unwrap();

        assert_eq!(store.history_len(), 2);
        assert_eq!(store.replay().unwrap(), *store.state());
        let tags: Vec<&str> = store.history().map(Action::tag).collect();
        assert_eq!(tags, vec!["c", "d"]);
    }

    #[test]
    fn test_zero_history_limit_keeps_nothing() {
        let mut store = store(0);
        store.dispatch(&update("api", "a", obj(json!({"x": 1})))).unwrap();
        store.dispatch(&reset("api", "b", Vec::<&str>::new())).unwrap();
        assert_eq!(store.history_len(), 0);
        assert_eq!(store.replay().unwrap(), *store.state());
    }
}
