//! Reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board` holds fetched cards and move bookkeeping; `drag` holds the active
//! drag gesture; `ui` holds page chrome (drawer, notices) that never reaches
//! the backend.

pub mod board;
pub mod drag;
pub mod ui;
