use super::*;

#[test]
fn upgrade_raises_info_toast() {
    let toasts = RwSignal::new(ToastState::default());
    upgrade(toasts, Pulse::new());
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].kind, ToastKind::Info);
        assert_eq!(s.toasts[0].message, "Redirecting to premium plans...");
    });
}

#[test]
fn begin_logout_shows_progress_before_feedback() {
    let toasts = RwSignal::new(ToastState::default());
    let logging_out = RwSignal::new(false);
    begin_logout(toasts, logging_out, &TaskSlot::new());
    assert!(logging_out.get_untracked());
    assert_eq!(logout_label(logging_out.get_untracked()), "Logging out...");
    assert!(toasts.with_untracked(|s| s.toasts.is_empty()));
}

#[test]
fn finish_logout_raises_info_toast() {
    let toasts = RwSignal::new(ToastState::default());
    finish_logout(toasts);
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts[0].kind, ToastKind::Info);
        assert_eq!(s.toasts[0].message, "Logged out successfully");
    });
}

#[test]
fn logout_label_defaults_to_logout() {
    assert_eq!(logout_label(false), "Logout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn confirm_declines_outside_the_browser() {
    assert!(!confirm(LOGOUT_PROMPT));
}
