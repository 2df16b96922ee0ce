//! Page-wide keyboard shortcuts.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the notification panel.
    ClosePanel,
    /// Ctrl/Cmd + K: focus and select the search input.
    FocusSearch,
}

/// Map a keydown to a shortcut. `key` is `KeyboardEvent.key`.
pub fn match_shortcut(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "Escape" => Some(Shortcut::ClosePanel),
        "k" if ctrl || meta => Some(Shortcut::FocusSearch),
        _ => None,
    }
}
