//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, loading, actions) and
//! delegates the rules to `state` and the rendering details to `components`.

pub mod home;
pub mod room_selection;
pub mod schedule;
pub mod seat_selection;
pub mod signin;
