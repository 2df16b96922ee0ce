//! Header search box.
//!
//! There is no search backend: typing logs the live term once it is long
//! enough, and Enter raises a toast echoing the query.

#[cfg(test)]
#[path = "search_box_test.rs"]
mod search_box_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::config::{SEARCH_LOG_MIN_CHARS, SEARCH_PULSE_MS};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::motion::press_transform;
use crate::util::pulse::Pulse;

/// Lowercased term to log while typing, if it is long enough.
///
/// Length is counted in UTF-16 code units, the same unit the browser reports
/// for an input's value, so an emoji counts as two.
fn live_search_term(raw: &str) -> Option<String> {
    let term = raw.to_lowercase();
    (term.encode_utf16().count() > SEARCH_LOG_MIN_CHARS).then_some(term)
}

/// Toast text for a submitted query; blank queries are ignored.
fn search_feedback(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("Searching for \"{query}\"..."))
}

/// Run a submitted search: log it, pulse the box, and echo it as a toast.
pub fn perform_search(query: &str, toasts: RwSignal<ToastState>, container_pulse: Pulse) {
    let Some(message) = search_feedback(query) else {
        return;
    };
    leptos::logging::log!("Performing search for: {query}");
    container_pulse.trigger(SEARCH_PULSE_MS);
    show_toast(toasts, message, ToastKind::Info);
}

/// Search input. `input_ref` lets the page focus it from a keyboard shortcut.
#[component]
pub fn SearchBox(input_ref: NodeRef<Input>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = RwSignal::new(String::new());
    let typing = Pulse::new();
    let submitted = Pulse::new();

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        typing.trigger(SEARCH_PULSE_MS);
        if let Some(term) = live_search_term(&value) {
            leptos::logging::log!("Searching for: {term}");
        }
        query.set(value);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            perform_search(&query.get_untracked(), toasts, submitted);
        }
    };

    view! {
        <div class="search-container" style=move || press_transform(submitted.is_active(), 1.05)>
            <i class="fas fa-search search-icon"></i>
            <input
                class="search-input"
                type="text"
                placeholder="Search workouts, plans, coaches..."
                node_ref=input_ref
                style=move || press_transform(typing.is_active(), 1.02)
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=on_keydown
            />
        </div>
    }
}
