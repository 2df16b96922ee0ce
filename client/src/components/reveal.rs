//! One-shot scroll-reveal wrapper for dashboard cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards render hidden and slightly lowered. An `IntersectionObserver`
//! reveals each card the first time it enters the viewport and then
//! disconnects, so scrolling back never hides it again.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::motion::reveal_style;

/// Wrap `children` in a `div` with `class` that fades in on first sight.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if revealed.get_untracked() {
                return;
            }
            observe_once(&el, revealed);
        });
    }

    view! {
        <div class=class id=id node_ref=node style=move || reveal_style(revealed.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::Element, revealed: RwSignal<bool>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                revealed.set(true);
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            // The observer holds the only JS reference; it disconnects itself after the first hit.
            callback.forget();
        }
        Err(err) => {
            leptos::logging::warn!("reveal observer unavailable: {err:?}");
            revealed.set(true);
        }
    }
}
