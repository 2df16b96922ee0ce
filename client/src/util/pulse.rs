//! Short press/pulse feedback for buttons and inputs.
//!
//! A `Pulse` is a boolean signal that switches on when triggered and back off
//! after a duration. Re-triggering before it settles supersedes the earlier
//! settle, so rapid clicks keep the element pressed instead of flickering.

#[cfg(test)]
#[path = "pulse_test.rs"]
mod pulse_test;

use leptos::prelude::*;

use crate::util::scheduler::TaskSlot;

#[derive(Clone, Copy)]
pub struct Pulse {
    active: RwSignal<bool>,
    slot: StoredValue<TaskSlot>,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Pulse {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(false),
            slot: StoredValue::new(TaskSlot::new()),
        }
    }

    /// Tracked read of the pulse state.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Switch on now and off after `duration_ms`.
    pub fn trigger(&self, duration_ms: u32) {
        self.active.set(true);
        let active = self.active;
        self.slot.get_value().schedule(duration_ms, move || active.set(false));
    }
}
