#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn preference_values_are_enabled_and_disabled_literals() {
    assert_eq!(preference_value(true), "enabled");
    assert_eq!(preference_value(false), "disabled");
}

#[test]
fn only_enabled_literal_parses_as_on() {
    assert!(parse_preference(Some("enabled")));
    assert!(!parse_preference(Some("disabled")));
    assert!(!parse_preference(Some("true")));
    assert!(!parse_preference(Some("Enabled")));
    assert!(!parse_preference(None));
}

#[test]
fn missing_preference_reads_as_off() {
    let store = MemoryStore::default();
    assert!(!read_preference_from(&store));
}

#[test]
fn toggling_on_then_off_persists_disabled() {
    let store = MemoryStore::default();
    persist_to(&store, true);
    assert_eq!(store.get("darkMode").as_deref(), Some("enabled"));
    assert!(read_preference_from(&store));

    persist_to(&store, false);
    assert_eq!(store.get("darkMode").as_deref(), Some("disabled"));
    assert!(!read_preference_from(&store));
}

#[test]
fn apply_and_set_are_noops_but_callable() {
    apply(true);
    apply(false);
    set_dark_mode(true);
    set_dark_mode(false);
}
