//! Integration tests for reset transitions.
//!
//! These tests verify that:
//! 1. The deepest existing prefix of a path is what gets restored
//! 2. Unknown top-level keys are removed, unknown deep paths fail
//! 3. Neither the initial nor the current state is ever mutated

use nova_state::{
    reset_state, reset_state_with, MissingPathPolicy, NovaError, ResetPaths,
};
use serde_json::{json, Value};

fn initial() -> Value {
    json!({"status": {"isFetching": false}})
}

// ============================================================================
// Prefix fallback
// ============================================================================

#[test]
fn test_reset_restores_deepest_existing_prefix() {
    let current = json!({
        "status": {"isFetching": {"some": {"missing": {"leaf": 1}, "other": 2}}},
        "_lastAction": "deep",
    });

    let paths = ResetPaths::from_strs(["status.isFetching.some.missing.leaf"]);
    let next = reset_state(&initial(), &current, &paths).unwrap();

    assert_eq!(
        next,
        json!({"status": {"isFetching": false}, "_lastAction": "deep"})
    );
}

#[test]
fn test_reset_exact_leaf() {
    let current = json!({"status": {"isFetching": true}, "test": true});
    let paths = ResetPaths::from_strs(["status.isFetching"]);
    let next = reset_state(&initial(), &current, &paths).unwrap();
    assert_eq!(next, json!({"status": {"isFetching": false}, "test": true}));
}

#[test]
fn test_reset_restores_boolean_false() {
    let initial = json!({"flags": {"enabled": false, "count": 0, "label": ""}});
    let current = json!({"flags": {"enabled": true, "count": 9, "label": "x"}});
    let paths = ResetPaths::from_strs(["flags.enabled", "flags.count", "flags.label"]);
    let next = reset_state(&initial, &current, &paths).unwrap();
    assert_eq!(next, initial);
}

#[test]
fn test_reset_restores_null_value() {
    let initial = json!({"error": null});
    let current = json!({"error": {"message": "boom"}});
    let next = reset_state(&initial, &current, &ResetPaths::from_strs(["error"])).unwrap();
    assert_eq!(next, json!({"error": null}));
}

// ============================================================================
// Branch independence
// ============================================================================

#[test]
fn test_reset_leaves_sibling_branches() {
    let current = json!({"status": {"isFetching": true, "another": {"path": true}}});
    let paths = ResetPaths::from_strs(["status.isFetching"]);
    let next = reset_state(&initial(), &current, &paths).unwrap();
    assert_eq!(
        next,
        json!({"status": {"isFetching": false, "another": {"path": true}}})
    );
}

#[test]
fn test_reset_recreates_missing_branch() {
    let current = json!({"test": true});
    let paths = ResetPaths::from_strs(["status.isFetching"]);
    let next = reset_state(&initial(), &current, &paths).unwrap();
    assert_eq!(next, json!({"test": true, "status": {"isFetching": false}}));
}

// ============================================================================
// Top-level misses and total misses
// ============================================================================

#[test]
fn test_reset_top_level_miss_deletes_key() {
    let current = json!({"status": {"isFetching": false}, "test": true});
    let next = reset_state(&initial(), &current, &ResetPaths::from_strs(["test"])).unwrap();
    assert_eq!(next, initial());
}

#[test]
fn test_reset_top_level_miss_absent_key_is_noop() {
    let current = json!({"status": {"isFetching": true}});
    let next = reset_state(&initial(), &current, &ResetPaths::from_strs(["ghost"])).unwrap();
    assert_eq!(next, current);
}

#[test]
fn test_reset_multi_segment_total_miss_fails() {
    let current = json!({"status": {"isFetching": true}, "test": true});
    let paths = ResetPaths::from_strs(["test", "wrong.path"]);
    let err = reset_state(&initial(), &current, &paths).unwrap_err();
    assert!(matches!(err, NovaError::PathNotFound { .. }));
    assert_eq!(err.to_string(), "provided path does not exist: wrong.path");
}

#[test]
fn test_reset_multi_segment_miss_with_ignore_policy() {
    let current = json!({"status": {"isFetching": true}, "test": true});
    let paths = ResetPaths::from_strs(["wrong.path", "status"]);
    let next = reset_state_with(&initial(), &current, &paths, MissingPathPolicy::Ignore).unwrap();
    assert_eq!(next, json!({"status": {"isFetching": false}, "test": true}));
}

// ============================================================================
// Total reset
// ============================================================================

#[test]
fn test_total_reset_ignores_current_content() {
    for current in [json!({}), json!({"a": 1}), json!({"status": {"isFetching": [1, 2]}})] {
        let next = reset_state(&initial(), &current, &ResetPaths::total()).unwrap();
        assert_eq!(next, initial());
    }
}

// ============================================================================
// Immutability
// ============================================================================

#[test]
fn test_reset_never_mutates_inputs() {
    let initial = json!({"status": {"isFetching": false, "nested": {"a": 1}}});
    let current = json!({"status": {"isFetching": true, "nested": {"a": 2}}, "test": true});
    let initial_before = initial.clone();
    let current_before = current.clone();

    let paths = ResetPaths::from_strs(["status.nested.a", "test", "status.isFetching"]);
    for _ in 0..3 {
        let mut next = reset_state(&initial, &current, &paths).unwrap();
        next["status"]["nested"]["a"] = json!(99);
    }
    let mut total = reset_state(&initial, &current, &ResetPaths::total()).unwrap();
    total["status"]["isFetching"] = json!("changed");

    assert_eq!(initial, initial_before, "reset mutated the initial state");
    assert_eq!(current, current_before, "reset mutated the current state");
}
