//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `toast`, `weight`) so individual widgets
//! can depend on small focused models provided through context.

pub mod toast;
pub mod ui;
pub mod weight;
