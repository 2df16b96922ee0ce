//! Timing and layout constants for dashboard interactions.
//!
//! Grouped here so page widgets and state helpers agree on one set of
//! durations and breakpoints.

/// Local-storage key holding the dark mode preference.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Viewport width (px) at or below which the sidebar stacks above content.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Docked sidebar width (px); also the content's left margin when docked.
pub const SIDEBAR_WIDTH_PX: f64 = 280.0;

/// Press feedback on nav links, toggles, the bell, and the upgrade button.
pub const PRESS_SETTLE_MS: u32 = 150;
/// Pulse on the search box while typing or submitting.
pub const SEARCH_PULSE_MS: u32 = 200;
/// Minimum search term length (exclusive) before typing is logged.
pub const SEARCH_LOG_MIN_CHARS: usize = 2;

/// Delay before an inserted element transitions to its resting state.
pub const ENTER_DELAY_MS: u32 = 10;
/// Toast lifetime before auto-dismiss.
pub const TOAST_LIFETIME_MS: u32 = 3_000;
/// Toast fade-out before it is detached.
pub const TOAST_FADE_MS: u32 = 300;

/// How long the subscribe button shows its success state.
pub const SUBSCRIBE_RESET_MS: u32 = 2_000;
/// Delay between logout confirmation and the follow-up toast.
pub const LOGOUT_FEEDBACK_MS: u32 = 1_000;

/// Stagger between weight-entry rows animating in at load.
pub const WEIGHT_ROW_STAGGER_MS: u32 = 100;

/// Intersection ratio at which a card reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Root margin for the reveal observer (shrinks the viewport bottom).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
