//! Account card with membership upgrade and logout.
//!
//! Neither action talks to a backend: logout asks for confirmation and then
//! only reports success, and upgrade only acknowledges the click.

#[cfg(test)]
#[path = "account_section_test.rs"]
mod account_section_test;

use leptos::prelude::*;

use crate::config::{LOGOUT_FEEDBACK_MS, PRESS_SETTLE_MS};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::motion::press_transform;
use crate::util::pulse::Pulse;
use crate::util::scheduler::TaskSlot;

const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";
const UPGRADE_MESSAGE: &str = "Redirecting to premium plans...";
const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

fn upgrade(toasts: RwSignal<ToastState>, pressed: Pulse) {
    pressed.trigger(PRESS_SETTLE_MS);
    show_toast(toasts, UPGRADE_MESSAGE, ToastKind::Info);
}

/// Confirmed logout: show progress now, report success after a beat.
fn begin_logout(toasts: RwSignal<ToastState>, logging_out: RwSignal<bool>, feedback: &TaskSlot) {
    logging_out.set(true);
    feedback.schedule(LOGOUT_FEEDBACK_MS, move || finish_logout(toasts));
}

fn finish_logout(toasts: RwSignal<ToastState>) {
    show_toast(toasts, LOGGED_OUT_MESSAGE, ToastKind::Info);
}

fn logout_label(logging_out: bool) -> &'static str {
    if logging_out { "Logging out..." } else { "Logout" }
}

#[component]
pub fn AccountSection() -> impl IntoView {
    view! {
        <h3 class="section-title">"Account"</h3>
        <div class="account-row">
            <div>
                <span class="account-row__label">"Plan"</span>
                <span class="account-row__value">"Basic"</span>
            </div>
            <UpgradeButton/>
        </div>
        <div class="account-row">
            <div>
                <span class="account-row__label">"Email"</span>
                <span class="account-row__value">"alex.morgan@example.com"</span>
            </div>
            <LogoutButton/>
        </div>
    }
}

#[component]
fn UpgradeButton() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pressed = Pulse::new();

    let on_click = move |_| upgrade(toasts, pressed);

    view! {
        <button class="upgrade-btn" style=move || press_transform(pressed.is_active(), 1.1) on:click=on_click>
            <i class="fas fa-crown"></i>
            " Upgrade"
        </button>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logging_out = RwSignal::new(false);
    let feedback = StoredValue::new(TaskSlot::new());

    let on_click = move |_| {
        if !confirm(LOGOUT_PROMPT) {
            return;
        }
        begin_logout(toasts, logging_out, &feedback.get_value());
    };

    view! {
        <button class="logout-btn" style=move || press_transform(logging_out.get(), 1.1) on:click=on_click>
            {move || logout_label(logging_out.get())}
        </button>
    }
}

/// Blocking browser confirmation. Declines outside the browser.
fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
