//! Top header: greeting, search, notification bell, and theme button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme button and the Dark Mode switch in the settings card write the
//! same `UiState` setting, so they can never disagree.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::notification_panel::open_notification_panel;
use crate::components::search_box::SearchBox;
use crate::components::settings_section::change_setting;
use crate::config::PRESS_SETTLE_MS;
use crate::state::toast::ToastState;
use crate::state::ui::{SettingId, UiState};
use crate::util::motion::press_transform;
use crate::util::pulse::Pulse;
use crate::util::scheduler::TaskSlot;

#[component]
pub fn DashboardHeader(search_input: NodeRef<Input>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__greeting">
                <h1>"Welcome back, Alex"</h1>
                <p>"Here's your training overview for this week"</p>
            </div>
            <SearchBox input_ref=search_input/>
            <div class="header-actions">
                <NotificationBell/>
                <ThemeButton/>
            </div>
        </header>
    }
}

#[component]
fn NotificationBell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pressed = Pulse::new();
    let entrance = StoredValue::new(TaskSlot::new());

    let on_click = move |_| {
        pressed.trigger(PRESS_SETTLE_MS);
        open_notification_panel(ui, &entrance.get_value());
    };

    view! {
        <button
            class="notification-icon"
            title="Notifications"
            style=move || press_transform(pressed.is_active(), 1.2)
            on:click=on_click
        >
            <i class="fas fa-bell"></i>
            <span class="notification-badge">"3"</span>
        </button>
    }
}

#[component]
fn ThemeButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_click = move |_| {
        let next = !ui.with_untracked(UiState::dark_mode);
        change_setting(ui, toasts, SettingId::DarkMode, next);
    };

    view! {
        <button class="theme-toggle" title="Toggle dark mode" on:click=on_click>
            <i class=move || if ui.with(UiState::dark_mode) { "fas fa-sun" } else { "fas fa-moon" }></i>
        </button>
    }
}
