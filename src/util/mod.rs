//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod observer;
pub mod scroll;
