//! Stack of transient toast notifications.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, dismiss_toast};

/// Renders every live toast in insertion order, each with its close button.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class_name = move || {
                        toasts.with(|s| s.get(id).map(Toast::class_name).unwrap_or_default())
                    };
                    view! {
                        <div class=class_name role="status">
                            <div class="toast-content">
                                <i class=format!("fas {}", toast.kind.icon_class())></i>
                                <span>{toast.message.clone()}</span>
                            </div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| dismiss_toast(toasts, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
