//! Reducer and store configuration.

use nova_state::MissingPathPolicy;
use serde::{Deserialize, Serialize};

/// Key stamped with the tag of the last applied action.
pub const LAST_ACTION_KEY: &str = "_lastAction";

/// Per-reducer configuration.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use nova_redux::ReducerConfig;
/// use nova_state::MissingPathPolicy;
///
/// let config: ReducerConfig = serde_json::from_str(r#"{"missing_path": "ignore"}"#).unwrap();
/// assert_eq!(config.stamp_key, "_lastAction");
/// assert_eq!(config.missing_path, MissingPathPolicy::Ignore);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// State key that receives the action tag after every handled action.
    pub stamp_key: String,
    /// Handling of multi-segment reset paths unknown to the initial state.
    pub missing_path: MissingPathPolicy,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            stamp_key: LAST_ACTION_KEY.to_string(),
            missing_path: MissingPathPolicy::Fail,
        }
    }
}

impl ReducerConfig {
    #[must_use]
    pub fn with_stamp_key(mut self, key: impl Into<String>) -> Self {
        self.stamp_key = key.into();
        self
    }

    #[must_use]
    pub fn with_missing_path(mut self, policy: MissingPathPolicy) -> Self {
        self.missing_path = policy;
        self
    }
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of recent actions kept for replay. Older actions are folded
    /// into the replay base.
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { history_limit: 256 }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
