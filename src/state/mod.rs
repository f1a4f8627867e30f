//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each picker is a plain struct with transition methods. Views hold them in
//! an `RwSignal` and call the transitions inside `update`, so every rule can
//! be tested without rendering.

pub mod auth;
pub mod heatmap;
pub mod room;
pub mod seat;
pub mod signin;
pub mod task;
