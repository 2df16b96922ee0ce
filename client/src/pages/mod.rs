//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (window listeners, load-time
//! setup) and delegates rendering details to `components`.

pub mod dashboard;
