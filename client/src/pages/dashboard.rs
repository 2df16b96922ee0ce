//! Member dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the page-wide concerns that do not belong
//! to any one widget: restoring the stored theme, seeding the weight card,
//! the resize breakpoint, and the Escape / Ctrl+K shortcuts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::html::Input;
use leptos::prelude::*;
use time::PrimitiveDateTime;

use crate::components::account_section::AccountSection;
use crate::components::header::DashboardHeader;
use crate::components::newsletter_card::NewsletterCard;
use crate::components::notification_panel::{NotificationPanel, close_notification_panel};
use crate::components::profile_cards::{FitnessStarCard, MusicProviderCard, UserInfoCard};
use crate::components::reveal::Reveal;
use crate::components::settings_section::SettingsSection;
use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::ToastStack;
use crate::components::weight_tracking::WeightTracking;
use crate::state::ui::{SettingId, UiState};
use crate::state::weight::WeightLog;
use crate::util::layout::LayoutMode;
use crate::util::shortcuts::Shortcut;

/// Dashboard page: sidebar, header, and the card grid.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let weights = expect_context::<RwSignal<WeightLog>>();
    let search_input = NodeRef::<Input>::new();

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let dark_mode = crate::util::dark_mode::read_preference();
        restore_page_state(ui, weights, dark_mode, crate::util::clock::local_now());
        crate::util::dark_mode::apply(dark_mode);
        if let Some(width) = crate::util::layout::viewport_width() {
            apply_viewport_width(ui, width);
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = crate::util::layout::viewport_width() {
            apply_viewport_width(ui, width);
        }
    });
    on_cleanup(move || resize.remove());

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let Some(shortcut) = crate::util::shortcuts::match_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        if shortcut == Shortcut::FocusSearch {
            ev.prevent_default();
        }
        run_shortcut(ui, shortcut, search_input);
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="main-content" style=move || ui.with(|u| u.layout.content_style())>
                <DashboardHeader search_input=search_input/>

                <section id="overview" class="dashboard-grid">
                    <Reveal class="user-info-card">
                        <UserInfoCard/>
                    </Reveal>
                    <Reveal class="fitness-star">
                        <FitnessStarCard/>
                    </Reveal>
                </section>

                <section id="progress" class="dashboard-grid">
                    <Reveal class="weight-tracking">
                        <WeightTracking/>
                    </Reveal>
                    <Reveal class="music-provider" id="workouts">
                        <MusicProviderCard/>
                    </Reveal>
                </section>

                <section id="nutrition" class="dashboard-grid">
                    <Reveal class="newsletter-card">
                        <NewsletterCard/>
                    </Reveal>
                </section>

                <section id="settings" class="dashboard-grid">
                    <Reveal class="settings-section">
                        <SettingsSection/>
                    </Reveal>
                    <Reveal class="account-section">
                        <AccountSection/>
                    </Reveal>
                </section>
            </main>
            <NotificationPanel/>
            <ToastStack/>
        </div>
    }
}

/// Load-time state: stored theme and the weight card's sample history.
fn restore_page_state(ui: RwSignal<UiState>, weights: RwSignal<WeightLog>, dark_mode: bool, now: PrimitiveDateTime) {
    ui.update(|u| u.settings.set(SettingId::DarkMode, dark_mode));
    weights.update(|log| {
        if log.entries.is_empty() {
            *log = WeightLog::seeded(now);
        }
    });
}

fn apply_viewport_width(ui: RwSignal<UiState>, width: f64) {
    let mode = LayoutMode::for_width(width);
    if ui.with_untracked(|u| u.layout) != mode {
        ui.update(|u| u.layout = mode);
    }
}

fn run_shortcut(ui: RwSignal<UiState>, shortcut: Shortcut, search_input: NodeRef<Input>) {
    match shortcut {
        Shortcut::ClosePanel => {
            if ui.with_untracked(|u| u.notification_panel.is_some()) {
                close_notification_panel(ui);
            }
        }
        Shortcut::FocusSearch => {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input) = search_input.get_untracked() {
                    let _ = input.focus();
                    input.select();
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = search_input;
            }
        }
    }
}
