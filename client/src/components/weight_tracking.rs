//! Weight tracking card: recent weigh-ins plus a quick log form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows present when the card first fills slide in on a stagger regardless of
//! scroll position; rows logged afterwards drop in from above.

use leptos::prelude::*;

use crate::config::ENTER_DELAY_MS;
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::state::weight::{WeightEntry, WeightLog, parse_weight_input};
use crate::util::clock::local_now;
use crate::util::motion::{RowEntrance, row_style, stagger_delay_ms};
use crate::util::scheduler::TaskSlot;

#[component]
pub fn WeightTracking() -> impl IntoView {
    let weights = expect_context::<RwSignal<WeightLog>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(String::new());

    let submit = Callback::new(move |()| match parse_weight_input(&draft.get_untracked()) {
        Ok(weight) => {
            weights.update(|log| {
                log.add(weight, local_now());
            });
            draft.set(String::new());
        }
        Err(err) => {
            leptos::logging::warn!("weight entry rejected: {err}");
            show_toast(toasts, "Please enter a valid weight in kg", ToastKind::Error);
        }
    });

    let current = move || weights.with(|log| log.latest().map(WeightEntry::weight_label));

    view! {
        <div class="weight-tracking__header">
            <h3 class="card-title">"Weight Tracking"</h3>
            <span class="weight-tracking__current">
                {move || current().unwrap_or_else(|| "—".to_owned())}
            </span>
        </div>
        <div class="weight-tracking__form">
            <input
                class="weight-input"
                type="number"
                step="0.1"
                min="0"
                placeholder="kg"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <button class="btn weight-log-btn" on:click=move |_| submit.run(())>
                "Log"
            </button>
        </div>
        <div class="weight-entries">
            <For
                each=move || weights.get().entries.into_iter().enumerate()
                key=|(_, entry): &(usize, WeightEntry)| entry.id
                children=move |(index, entry): (usize, WeightEntry)| view! { <WeightRow entry=entry index=index/> }
            />
        </div>
    }
}

#[component]
fn WeightRow(entry: WeightEntry, index: usize) -> impl IntoView {
    let shown = RwSignal::new(false);
    let entrance = if entry.inserted { RowEntrance::Inserted } else { RowEntrance::Staggered };
    let delay = match entrance {
        RowEntrance::Staggered => stagger_delay_ms(index),
        RowEntrance::Inserted => ENTER_DELAY_MS,
    };
    TaskSlot::new().schedule(delay, move || shown.set(true));

    let today = local_now().date();

    view! {
        <div class="weight-entry" style=move || row_style(entrance, shown.get())>
            <div class="entry-info">
                <span class="date">{entry.date_label(today)}</span>
                <span class="weight">{entry.weight_label()}</span>
            </div>
            <div class=format!("entry-change {}", entry.change_class())>
                <span class="time">{entry.time_label()}</span>
                <span class="change">{entry.change_label()}</span>
                <i class=format!("fas {}", entry.arrow_icon())></i>
            </div>
        </div>
    }
}
