//! Browser localStorage helpers for state that outlives a page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend cannot represent the review columns, so locally advanced
//! `Reviewing`/`Confirmed` statuses are kept here between sessions. Reads and
//! writes are csr-only; native builds no-op.

use kanban::StatusOverrides;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the review-status overrides.
pub const OVERRIDES_KEY: &str = "docboard:status-overrides";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable {key} in localStorage: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            leptos::logging::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Overrides saved by a previous session, or an empty store.
pub fn load_overrides() -> StatusOverrides {
    load_json(OVERRIDES_KEY).unwrap_or_default()
}

pub fn save_overrides(overrides: &StatusOverrides) {
    save_json(OVERRIDES_KEY, overrides);
}
