//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui_persistence` isolates browser storage glue; `display` holds the pure
//! text formatting used by cards and the detail drawer.

pub mod display;
pub mod ui_persistence;
