//! Settings card with animated toggle switches.
//!
//! DESIGN
//! ======
//! Each switch is built with the `SettingId` it controls, and side effects
//! dispatch on that id. Relabeling a row never changes what it does.

#[cfg(test)]
#[path = "settings_section_test.rs"]
mod settings_section_test;

use leptos::prelude::*;

use crate::config::PRESS_SETTLE_MS;
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::state::ui::{SettingId, UiState};
use crate::util::dark_mode;
use crate::util::motion::slider_transform;
use crate::util::pulse::Pulse;

/// What flipping a setting does beyond storing its new value.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SettingEffect {
    Theme(bool),
    Toast(&'static str, ToastKind),
    Log(String),
}

fn setting_effect(id: SettingId, enabled: bool) -> SettingEffect {
    match id {
        SettingId::DarkMode => SettingEffect::Theme(enabled),
        SettingId::Notifications if enabled => SettingEffect::Toast("Notifications enabled", ToastKind::Success),
        SettingId::Notifications => SettingEffect::Toast("Notifications disabled", ToastKind::Info),
        SettingId::WorkoutReminders | SettingId::AutoSync => {
            SettingEffect::Log(format!("{} toggled: {enabled}", id.label()))
        }
    }
}

/// Store a setting and run its side effect. Shared by the switches and the
/// header theme button.
pub fn change_setting(ui: RwSignal<UiState>, toasts: RwSignal<ToastState>, id: SettingId, enabled: bool) {
    ui.update(|u| u.settings.set(id, enabled));
    match setting_effect(id, enabled) {
        SettingEffect::Theme(on) => dark_mode::set_dark_mode(on),
        SettingEffect::Toast(message, kind) => show_toast(toasts, message, kind),
        SettingEffect::Log(line) => leptos::logging::log!("{line}"),
    }
}

#[component]
pub fn SettingsSection() -> impl IntoView {
    view! {
        <h3 class="section-title">"Settings"</h3>
        <div class="settings-list">
            {SettingId::ALL.into_iter().map(|id| view! { <SettingRow id=id/> }).collect_view()}
        </div>
    }
}

#[component]
fn SettingRow(id: SettingId) -> impl IntoView {
    view! {
        <div class="setting-item">
            <span>{id.label()}</span>
            <ToggleSwitch id=id/>
        </div>
    }
}

/// Two-state switch bound to one setting.
#[component]
pub fn ToggleSwitch(id: SettingId) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let settling = Pulse::new();

    let active = move || ui.with(|u| u.settings.get(id));

    let on_click = move |_| {
        let next = !ui.with_untracked(|u| u.settings.get(id));
        settling.trigger(PRESS_SETTLE_MS);
        change_setting(ui, toasts, id, next);
    };

    view! {
        <div
            class="toggle-switch"
            class:active=active
            role="switch"
            aria-checked=move || active().to_string()
            aria-label=id.label()
            on:click=on_click
        >
            <div class="toggle-slider" style=move || slider_transform(active(), settling.is_active())></div>
        </div>
    }
}
