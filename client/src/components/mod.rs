//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board's columns, cards, stats strip, and detail
//! drawer, reading shared state from Leptos context providers.

pub mod board_column;
pub mod detail_drawer;
pub mod document_card;
pub mod stats_overview;
pub mod status_badge;
