//! REST path construction shared by the browser client and the CLI.
//!
//! Every helper takes the API base (`/api` in the browser,
//! `http://host:port/api` from the CLI) and returns a ready-to-send URL.
//! Trailing slashes on the base are ignored.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::{Deserialize, Serialize};

use crate::flow::CONFIG_STATUS_ACTIVE;
use crate::status::BackendStatus;

/// Default page size for flow listings.
pub const DEFAULT_FLOW_LIMIT: u32 = 100;
/// Largest page size the backend accepts for flow listings.
pub const MAX_FLOW_LIMIT: u32 = 100;

/// Query parameters for `GET {base}/flows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowQuery {
    pub limit: u32,
    pub offset: u32,
    pub config_id: Option<i64>,
    pub status: Option<BackendStatus>,
}

impl Default for FlowQuery {
    fn default() -> Self {
        Self { limit: DEFAULT_FLOW_LIMIT, offset: 0, config_id: None, status: None }
    }
}

impl FlowQuery {
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!("limit={}&offset={}", self.limit, self.offset);
        if let Some(config_id) = self.config_id {
            query.push_str(&format!("&config_id={config_id}"));
        }
        if let Some(status) = self.status {
            query.push_str(&format!("&status={}", status.code()));
        }
        query
    }
}

/// Body of the status-update request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub main_status: BackendStatus,
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[must_use]
pub fn flows_path(base: &str, query: &FlowQuery) -> String {
    format!("{}/flows?{}", trim_base(base), query.query_string())
}

#[must_use]
pub fn flow_path(base: &str, flow_id: i64) -> String {
    format!("{}/flows/{flow_id}", trim_base(base))
}

/// Multipart `POST` that creates one flow per uploaded file under a config.
#[must_use]
pub fn upload_path(base: &str, config_id: i64) -> String {
    format!("{}/flows/upload?config_id={config_id}", trim_base(base))
}

/// Form field carrying the uploaded files.
pub const UPLOAD_FIELD: &str = "files";

/// `GET {base}/configs`, filtered by config status when one is given.
#[must_use]
pub fn configs_path(base: &str, status: Option<i64>) -> String {
    match status {
        Some(status) => format!("{}/configs?status={status}", trim_base(base)),
        None => format!("{}/configs", trim_base(base)),
    }
}

/// Configs listing restricted to active configs.
#[must_use]
pub fn active_configs_path(base: &str) -> String {
    configs_path(base, Some(CONFIG_STATUS_ACTIVE))
}

#[must_use]
pub fn health_path(base: &str) -> String {
    format!("{}/health", trim_base(base))
}
