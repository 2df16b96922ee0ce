//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `dark-mode` class to `<body>`. Toggling writes `"enabled"` or
//! `"disabled"` back under [`DARK_MODE_STORAGE_KEY`].
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic. Storage goes through
//! [`PreferenceStore`] so the read/write contract is testable off-browser.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::DARK_MODE_STORAGE_KEY;

/// Body class applied while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

/// String key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; reads nothing and writes nowhere outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Stored literal for a preference state.
pub fn preference_value(enabled: bool) -> &'static str {
    if enabled { ENABLED } else { DISABLED }
}

/// Only the literal `"enabled"` turns dark mode on.
pub fn parse_preference(raw: Option<&str>) -> bool {
    raw == Some(ENABLED)
}

pub fn read_preference_from(store: &impl PreferenceStore) -> bool {
    parse_preference(store.get(DARK_MODE_STORAGE_KEY).as_deref())
}

pub fn persist_to(store: &impl PreferenceStore, enabled: bool) {
    store.set(DARK_MODE_STORAGE_KEY, preference_value(enabled));
}

/// Read the dark mode preference from localStorage.
pub fn read_preference() -> bool {
    read_preference_from(&BrowserStorage)
}

/// Add or remove the body-level dark mode class.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Apply dark mode and persist the new preference to localStorage.
pub fn set_dark_mode(enabled: bool) {
    apply(enabled);
    persist_to(&BrowserStorage, enabled);
}
