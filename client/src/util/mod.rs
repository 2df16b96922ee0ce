//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clock;
pub mod dark_mode;
pub mod email;
pub mod layout;
pub mod motion;
pub mod pulse;
pub mod scheduler;
pub mod shortcuts;
