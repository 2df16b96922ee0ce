//! Newsletter subscription card.

#[cfg(test)]
#[path = "newsletter_card_test.rs"]
mod newsletter_card_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::config::SUBSCRIBE_RESET_MS;
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::email::{EmailError, validate_email};
use crate::util::motion::press_transform;
use crate::util::scheduler::TaskSlot;

const SUBSCRIBED_MESSAGE: &str = "Successfully subscribed to newsletter!";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

fn subscribe_label(subscribed: bool) -> &'static str {
    if subscribed { "Subscribed!" } else { "Subscribe" }
}

/// Validate the typed address and report the outcome as a toast.
///
/// A valid address flips the button to its subscribed state; `reset` later
/// restores it and clears the input.
fn subscribe(
    email: RwSignal<String>,
    subscribed: RwSignal<bool>,
    reset: &TaskSlot,
    toasts: RwSignal<ToastState>,
) -> Result<(), EmailError> {
    match validate_email(&email.get_untracked()) {
        Ok(address) => {
            leptos::logging::log!("newsletter subscription: {address}");
            subscribed.set(true);
            reset.schedule(SUBSCRIBE_RESET_MS, move || {
                subscribed.set(false);
                email.set(String::new());
            });
            show_toast(toasts, SUBSCRIBED_MESSAGE, ToastKind::Success);
            Ok(())
        }
        Err(err) => {
            leptos::logging::warn!("newsletter subscription rejected: {err}");
            show_toast(toasts, INVALID_EMAIL_MESSAGE, ToastKind::Error);
            Err(err)
        }
    }
}

#[component]
pub fn NewsletterCard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);
    let reset = StoredValue::new(TaskSlot::new());
    let input_ref = NodeRef::<Input>::new();

    let submit = Callback::new(move |()| {
        if subscribe(email, subscribed, &reset.get_value(), toasts).is_err() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        }
    });

    view! {
        <h3 class="card-title">"Newsletter"</h3>
        <p class="card-subtitle">"Weekly training tips and new programs, straight to your inbox."</p>
        <div class="newsletter-form">
            <input
                class="email-input"
                type="email"
                placeholder="you@example.com"
                node_ref=input_ref
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <button
                class="subscribe-btn"
                class:subscribe-btn--done=move || subscribed.get()
                style=move || press_transform(subscribed.get(), 1.1)
                on:click=move |_| submit.run(())
            >
                {move || subscribe_label(subscribed.get())}
            </button>
        </div>
    }
}
