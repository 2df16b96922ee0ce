//! Inline style strings for press, slide, and reveal transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets keep a boolean "in transition" signal and render one of these
//! strings; the CSS transition does the interpolation. Keeping the strings
//! here lets the exact transforms be checked without a DOM.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::config::WEIGHT_ROW_STAGGER_MS;

/// Transform for a pressable element: `scale(factor)` while pressed.
pub fn press_transform(pressed: bool, factor: f64) -> String {
    if pressed { format!("transform: scale({factor});") } else { "transform: scale(1);".to_owned() }
}

/// Toggle slider transform. While `settling`, the knob is slightly enlarged.
pub fn slider_transform(active: bool, settling: bool) -> &'static str {
    match (active, settling) {
        (true, true) => "transform: translateX(24px) scale(1.1);",
        (false, true) => "transform: translateX(0) scale(1.1);",
        (true, false) => "transform: translateX(24px);",
        (false, false) => "transform: translateX(0);",
    }
}

/// Scroll-reveal card style: hidden and lowered until revealed.
pub fn reveal_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

/// How a weight row enters the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEntrance {
    /// Present at page load; slides in from the left on a stagger.
    Staggered,
    /// Logged during the session; drops in from above.
    Inserted,
}

/// Weight row style for its entrance kind and whether it has settled.
pub fn row_style(entrance: RowEntrance, shown: bool) -> &'static str {
    match (entrance, shown) {
        (_, true) => "opacity: 1; transform: translate(0, 0); transition: opacity 0.4s ease, transform 0.4s ease;",
        (RowEntrance::Staggered, false) => {
            "opacity: 0; transform: translateX(-20px); transition: opacity 0.4s ease, transform 0.4s ease;"
        }
        (RowEntrance::Inserted, false) => {
            "opacity: 0; transform: translateY(-20px); transition: opacity 0.4s ease, transform 0.4s ease;"
        }
    }
}

/// Delay before the `index`th load-time row animates in.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(WEIGHT_ROW_STAGGER_MS)
}

/// Notification panel entrance style.
pub fn panel_style(entered: bool) -> &'static str {
    if entered {
        "opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(-20px);"
    }
}
