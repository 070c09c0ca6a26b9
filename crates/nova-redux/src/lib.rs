//! Named reducers with update and path-based reset actions.
//!
//! A reducer is created from a name and an initial state. It handles two
//! kinds of actions addressed to that name:
//!
//! - **UPDATE** shallow-merges a patch into the state
//! - **RESET** restores listed paths to their initial values (see
//!   [`nova_state::reset_state`]); an empty list restores everything
//!
//! Every handled action stamps its tag under `_lastAction`.
//!
//! # Quick Start
//!
//! ```
//! use nova_redux::{reset, update, Reducer};
//! use serde_json::json;
//!
//! let api = Reducer::new("api", json!({"status": {"isFetching": false}})).unwrap();
//!
//! let patch = json!({"status": {"isFetching": true}}).as_object().unwrap().clone();
//! let loading = api.init(&update("api", "fetch", patch)).unwrap();
//! assert_eq!(loading["status"]["isFetching"], true);
//!
//! let done = api.reduce(&loading, &reset("api", "done", ["status.isFetching"])).unwrap();
//! assert_eq!(done, json!({"status": {"isFetching": false}, "_lastAction": "done"}));
//! ```
//!
//! Payloads that arrive as raw JSON go through [`Reducer::reduce_value`],
//! which validates their shape and never hands back an error disguised as a
//! state.

mod action;
mod config;
mod reducer;
mod store;

pub use action::{reset, reset_from_value, update, Action, ActionKind};
pub use config::{ReducerConfig, StoreConfig, LAST_ACTION_KEY};
pub use reducer::{Reducer, Transition};
pub use store::{Store, StoreError};
