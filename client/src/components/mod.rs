//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard widgets while reading/writing shared state
//! from Leptos context providers.

pub mod account_section;
pub mod header;
pub mod newsletter_card;
pub mod notification_panel;
pub mod profile_cards;
pub mod reveal;
pub mod search_box;
pub mod settings_section;
pub mod sidebar;
pub mod toast_stack;
pub mod weight_tracking;
