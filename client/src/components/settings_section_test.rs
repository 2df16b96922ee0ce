use super::*;

#[test]
fn dark_mode_switch_drives_theme() {
    assert_eq!(setting_effect(SettingId::DarkMode, true), SettingEffect::Theme(true));
    assert_eq!(setting_effect(SettingId::DarkMode, false), SettingEffect::Theme(false));
}

#[test]
fn notifications_switch_raises_toast_per_state() {
    assert_eq!(
        setting_effect(SettingId::Notifications, true),
        SettingEffect::Toast("Notifications enabled", ToastKind::Success)
    );
    assert_eq!(
        setting_effect(SettingId::Notifications, false),
        SettingEffect::Toast("Notifications disabled", ToastKind::Info)
    );
}

#[test]
fn other_switches_only_log_their_state() {
    assert_eq!(
        setting_effect(SettingId::WorkoutReminders, false),
        SettingEffect::Log("Workout Reminders toggled: false".to_owned())
    );
    assert_eq!(
        setting_effect(SettingId::AutoSync, true),
        SettingEffect::Log("Auto Sync toggled: true".to_owned())
    );
}

#[test]
fn change_setting_stores_value_and_toasts() {
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    change_setting(ui, toasts, SettingId::Notifications, false);
    assert!(!ui.with_untracked(|u| u.settings.get(SettingId::Notifications)));
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].message, "Notifications disabled");
        assert_eq!(s.toasts[0].kind, ToastKind::Info);
    });
}

#[test]
fn change_setting_dark_mode_on_then_off() {
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    change_setting(ui, toasts, SettingId::DarkMode, true);
    assert!(ui.with_untracked(UiState::dark_mode));
    change_setting(ui, toasts, SettingId::DarkMode, false);
    assert!(!ui.with_untracked(UiState::dark_mode));
    assert!(toasts.with_untracked(|s| s.toasts.is_empty()));
}
