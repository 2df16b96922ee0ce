//! Sidebar navigation.
//!
//! The active item is `UiState::active_nav`; clicking a link highlights it,
//! plays a short press, and smooth-scrolls to its in-page anchor.

use leptos::prelude::*;

use crate::config::PRESS_SETTLE_MS;
use crate::state::ui::{NavSection, UiState};
use crate::util::motion::press_transform;
use crate::util::pulse::Pulse;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="sidebar" style=move || ui.with(|u| u.layout.sidebar_style())>
            <div class="sidebar__brand">
                <i class="fas fa-heartbeat"></i>
                <span>"FitDash"</span>
            </div>
            <nav>
                <ul class="nav-list">
                    {NavSection::ALL.into_iter().map(|section| view! { <NavItem section=section/> }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn NavItem(section: NavSection) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pressed = Pulse::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.active_nav = section);
        pressed.trigger(PRESS_SETTLE_MS);
        scroll_to_anchor(section.anchor());
    };

    view! {
        <li class="nav-item" class:active=move || ui.with(|u| u.active_nav == section)>
            <a
                class="nav-link"
                href=format!("#{}", section.anchor())
                style=move || press_transform(pressed.is_active(), 0.95)
                on:click=on_click
            >
                <i class=format!("fas {}", section.icon())></i>
                <span>{section.label()}</span>
            </a>
        </li>
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport, if present.
fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
