//! Toast notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any widget can raise a toast through [`show_toast`]; the `ToastStack`
//! component renders the stack in insertion order. Each toast carries its own
//! timer slots so a manual close supersedes the pending auto-dismiss.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::config::{ENTER_DELAY_MS, TOAST_FADE_MS, TOAST_LIFETIME_MS};
use crate::util::scheduler::TaskSlot;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Font Awesome icon class for this kind.
    pub fn icon_class(self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// Where a toast is in its show/dismiss lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the document, before the `show` class is applied.
    Entering,
    Shown,
    /// `show` removed; detached once the fade finishes.
    Leaving,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
    /// Entrance timer.
    reveal: TaskSlot,
    /// Auto-dismiss, then fade-out removal.
    lifecycle: TaskSlot,
}

impl Toast {
    pub fn is_shown(&self) -> bool {
        self.phase == ToastPhase::Shown
    }

    /// `toast-notification {kind}` plus `show` while shown.
    pub fn class_name(&self) -> String {
        let mut class = format!("toast-notification {}", self.kind.css_class());
        if self.is_shown() {
            class.push_str(" show");
        }
        class
    }
}

/// All live toasts in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Entering,
            reveal: TaskSlot::new(),
            lifecycle: TaskSlot::new(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Apply the `show` class to an entering toast.
    pub fn reveal(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Entering => {
                toast.phase = ToastPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start fading a toast out. Returns `false` if it is gone or already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                toast.reveal.cancel();
                true
            }
            _ => false,
        }
    }

    /// Detach a toast from the stack.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn slots(&self, id: u64) -> Option<(TaskSlot, TaskSlot)> {
        self.get(id).map(|t| (t.reveal.clone(), t.lifecycle.clone()))
    }
}

/// Raise a toast: it slides in, then dismisses itself after its lifetime.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let mut id = 0;
    toasts.update(|s| id = s.push(message, kind));
    let Some((reveal, lifecycle)) = toasts.with_untracked(|s| s.slots(id)) else {
        return;
    };
    reveal.schedule(ENTER_DELAY_MS, move || {
        toasts.update(|s| {
            s.reveal(id);
        });
    });
    lifecycle.schedule(TOAST_LIFETIME_MS, move || dismiss_toast(toasts, id));
}

/// Fade a toast out and detach it. Supersedes its pending auto-dismiss.
pub fn dismiss_toast(toasts: RwSignal<ToastState>, id: u64) {
    let mut started = false;
    toasts.update(|s| started = s.begin_dismiss(id));
    if !started {
        return;
    }
    let Some((_, lifecycle)) = toasts.with_untracked(|s| s.slots(id)) else {
        return;
    };
    lifecycle.schedule(TOAST_FADE_MS, move || {
        toasts.update(|s| {
            s.remove(id);
        });
    });
}
