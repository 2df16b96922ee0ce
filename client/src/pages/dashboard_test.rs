use time::macros::datetime;

use super::*;

#[test]
fn restore_applies_stored_dark_mode_and_seeds_weights() {
    let ui = RwSignal::new(UiState::default());
    let weights = RwSignal::new(WeightLog::default());
    restore_page_state(ui, weights, true, datetime!(2025 - 03 - 04 07:30));
    assert!(ui.with_untracked(UiState::dark_mode));
    assert_eq!(weights.with_untracked(|log| log.entries.len()), 3);
}

#[test]
fn restore_keeps_existing_weight_entries() {
    let ui = RwSignal::new(UiState::default());
    let mut log = WeightLog::default();
    log.add(72.0, datetime!(2025 - 03 - 04 07:30));
    let weights = RwSignal::new(log);
    restore_page_state(ui, weights, false, datetime!(2025 - 03 - 04 07:30));
    assert!(!ui.with_untracked(UiState::dark_mode));
    assert_eq!(weights.with_untracked(|log| log.entries.len()), 1);
}

#[test]
fn narrow_viewport_stacks_layout() {
    let ui = RwSignal::new(UiState::default());
    apply_viewport_width(ui, 768.0);
    assert_eq!(ui.with_untracked(|u| u.layout), LayoutMode::Stacked);
    assert_eq!(ui.with_untracked(|u| u.layout.content_margin_left()), "0");
}

#[test]
fn wide_viewport_restores_docked_layout() {
    let ui = RwSignal::new(UiState::default());
    apply_viewport_width(ui, 500.0);
    apply_viewport_width(ui, 1280.0);
    assert_eq!(ui.with_untracked(|u| u.layout), LayoutMode::Docked);
    assert_eq!(ui.with_untracked(|u| u.layout.sidebar_position()), "fixed");
}

#[test]
fn escape_shortcut_closes_open_panel() {
    let ui = RwSignal::new(UiState::default());
    ui.update(|u| {
        u.open_notification_panel();
    });
    run_shortcut(ui, Shortcut::ClosePanel, NodeRef::new());
    assert!(ui.with_untracked(|u| u.notification_panel.is_none()));
}

#[test]
fn escape_shortcut_without_panel_is_noop() {
    let ui = RwSignal::new(UiState::default());
    run_shortcut(ui, Shortcut::ClosePanel, NodeRef::new());
    assert_eq!(ui.with_untracked(|u| u.clone()), UiState::default());
}
