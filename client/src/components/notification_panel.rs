//! Notification dropdown opened from the header bell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel exists only while `UiState::notification_panel` is `Some`; closing
//! drops it from the document and the next open rebuilds its items.

use leptos::prelude::*;

use crate::config::ENTER_DELAY_MS;
use crate::state::ui::UiState;
use crate::util::motion::panel_style;
use crate::util::scheduler::TaskSlot;

/// Open (or re-animate) the panel and release its entrance after a tick.
pub fn open_notification_panel(ui: RwSignal<UiState>, entrance: &TaskSlot) {
    ui.update(|u| {
        u.open_notification_panel();
    });
    entrance.schedule(ENTER_DELAY_MS, move || ui.update(UiState::settle_notification_panel));
}

pub fn close_notification_panel(ui: RwSignal<UiState>) {
    ui.update(|u| {
        u.close_notification_panel();
    });
}

/// Overlay panel. Clicking the overlay outside the panel body closes it.
#[component]
pub fn NotificationPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let entered = move || ui.with(|u| u.notification_panel.as_ref().is_some_and(|p| p.entered));
    let items = move || {
        ui.with(|u| u.notification_panel.as_ref().map(|p| p.items.clone()).unwrap_or_default())
    };

    view! {
        <Show when=move || ui.with(|u| u.notification_panel.is_some())>
            <div class="notification-panel" on:click=move |_| close_notification_panel(ui)>
                <div
                    class="notification-panel__body"
                    style=move || panel_style(entered())
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="notification-header">
                        <h3>"Notifications"</h3>
                        <button
                            class="close-panel"
                            title="Close notifications"
                            on:click=move |_| close_notification_panel(ui)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="notification-list">
                        {move || {
                            items()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="notification-item">
                                            <i class=format!("fas {}", item.icon)></i>
                                            <div class="notification-content">
                                                <h4>{item.title}</h4>
                                                <p>{item.body}</p>
                                                <span class="notification-time">{item.time}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
