//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components render state owned by pages and never talk to storage or the
//! network directly, except `UnlockButton`, whose operation is self-contained.

pub mod heatmap_grid;
pub mod seat_info_panel;
pub mod unlock_button;
