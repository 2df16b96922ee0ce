use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode());
}

#[test]
fn ui_state_default_has_no_panel_and_docked_layout() {
    let state = UiState::default();
    assert_eq!(state.notification_panel, None);
    assert_eq!(state.layout, LayoutMode::Docked);
    assert_eq!(state.active_nav, NavSection::Dashboard);
}

// =============================================================
// Settings
// =============================================================

#[test]
fn dark_mode_toggled_on_then_off_ends_off() {
    let mut state = UiState::default();
    state.settings.set(SettingId::DarkMode, true);
    assert!(state.dark_mode());
    state.settings.set(SettingId::DarkMode, false);
    assert!(!state.dark_mode());
}

#[test]
fn settings_are_independent() {
    let mut settings = Settings::default();
    settings.set(SettingId::AutoSync, true);
    settings.set(SettingId::Notifications, false);
    assert!(settings.get(SettingId::AutoSync));
    assert!(!settings.get(SettingId::Notifications));
    assert!(!settings.get(SettingId::DarkMode));
    assert!(settings.get(SettingId::WorkoutReminders));
}

#[test]
fn setting_labels_are_unique() {
    for (i, a) in SettingId::ALL.iter().enumerate() {
        for (j, b) in SettingId::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
    assert_eq!(SettingId::DarkMode.label(), "Dark Mode");
    assert_eq!(SettingId::Notifications.label(), "Notification");
}

// =============================================================
// Notification panel
// =============================================================

#[test]
fn opening_panel_builds_three_sample_items() {
    let mut state = UiState::default();
    assert!(state.open_notification_panel());
    let panel = state.notification_panel.as_ref().expect("panel open");
    assert_eq!(panel.items.len(), 3);
    assert_eq!(panel.items[0].title, "Workout Reminder");
    assert_eq!(panel.items[1].title, "Goal Achieved!");
    assert_eq!(panel.items[2].title, "Meal Plan Updated");
    assert!(!panel.entered);
}

#[test]
fn opening_twice_keeps_a_single_panel() {
    let mut state = UiState::default();
    assert!(state.open_notification_panel());
    state.settle_notification_panel();
    assert!(!state.open_notification_panel());
    assert!(state.notification_panel.is_some());
    assert!(!state.notification_panel.as_ref().is_some_and(|p| p.entered));
}

#[test]
fn closing_removes_panel_entirely() {
    let mut state = UiState::default();
    state.open_notification_panel();
    assert!(state.close_notification_panel());
    assert!(state.notification_panel.is_none());
    assert!(!state.close_notification_panel());
}

#[test]
fn settle_without_panel_is_noop() {
    let mut state = UiState::default();
    state.settle_notification_panel();
    assert_eq!(state.notification_panel, None);
}

// =============================================================
// NavSection
// =============================================================

#[test]
fn nav_anchors_are_distinct() {
    for (i, a) in NavSection::ALL.iter().enumerate() {
        for (j, b) in NavSection::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a.anchor(), b.anchor());
            } else {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }
}
