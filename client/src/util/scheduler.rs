//! Owned, cancellable delayed callbacks.
//!
//! DESIGN
//! ======
//! A `TaskSlot` owns at most one pending callback. Scheduling through a slot
//! bumps its generation, so any callback armed earlier wakes up stale and
//! does nothing. Cancelling bumps the generation without arming. The slot is
//! `Send + Sync` and cheap to clone, so it can live inside signal state and
//! `Callback`s.
//!
//! Timers only run in the browser (`hydrate`); elsewhere scheduling arms the
//! slot but never fires, keeping SSR output deterministic.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to a single superseding delayed task.
#[derive(Clone, Debug, Default)]
pub struct TaskSlot {
    generation: Arc<AtomicU64>,
}

/// Proof that a callback was armed at a particular slot generation.
#[derive(Clone, Debug)]
pub struct TaskTicket {
    slot: TaskSlot,
    generation: u64,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot, invalidating every earlier ticket.
    pub fn arm(&self) -> TaskTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        TaskTicket { slot: self.clone(), generation }
    }

    /// Invalidate any pending callback.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run `f` after `delay_ms` unless the slot is re-armed or cancelled first.
    pub fn schedule<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.arm();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                if ticket.is_current() {
                    f();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, delay_ms, f);
        }
    }
}

impl TaskTicket {
    /// Whether this ticket is still the slot's latest arming.
    pub fn is_current(&self) -> bool {
        self.slot.generation.load(Ordering::SeqCst) == self.generation
    }
}
