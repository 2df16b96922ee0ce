use super::*;

fn submit(raw: &str) -> (Result<(), EmailError>, RwSignal<bool>, RwSignal<ToastState>) {
    let email = RwSignal::new(raw.to_owned());
    let subscribed = RwSignal::new(false);
    let toasts = RwSignal::new(ToastState::default());
    let result = subscribe(email, subscribed, &TaskSlot::new(), toasts);
    (result, subscribed, toasts)
}

#[test]
fn valid_address_subscribes_with_success_toast() {
    let (result, subscribed, toasts) = submit("  runner@example.com ");
    assert_eq!(result, Ok(()));
    assert!(subscribed.get_untracked());
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].kind, ToastKind::Success);
        assert_eq!(s.toasts[0].message, "Successfully subscribed to newsletter!");
    });
}

#[test]
fn blank_address_raises_error_toast() {
    let (result, subscribed, toasts) = submit("   ");
    assert_eq!(result, Err(EmailError::Empty));
    assert!(!subscribed.get_untracked());
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].kind, ToastKind::Error);
        assert_eq!(s.toasts[0].message, "Please enter a valid email address");
    });
}

#[test]
fn malformed_address_raises_error_toast() {
    let (result, subscribed, toasts) = submit("runner@example");
    assert_eq!(result, Err(EmailError::Malformed("runner@example".to_owned())));
    assert!(!subscribed.get_untracked());
    toasts.with_untracked(|s| {
        assert_eq!(s.toasts[0].kind, ToastKind::Error);
        assert_eq!(s.toasts[0].message, "Please enter a valid email address");
    });
}

#[test]
fn rejected_address_keeps_the_typed_text() {
    let email = RwSignal::new("nope".to_owned());
    let toasts = RwSignal::new(ToastState::default());
    let _ = subscribe(email, RwSignal::new(false), &TaskSlot::new(), toasts);
    assert_eq!(email.get_untracked(), "nope");
}

#[test]
fn button_label_follows_subscribed_state() {
    assert_eq!(subscribe_label(false), "Subscribe");
    assert_eq!(subscribe_label(true), "Subscribed!");
}
