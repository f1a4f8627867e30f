//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic so the latter can run and be tested without a DOM.

pub mod auth;
pub mod date;
pub mod navigate;
pub mod storage;
