//! Networking for the board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend's REST endpoints. Wire types and path building
//! live in the `kanban` crate and are shared with the CLI.

pub mod api;
