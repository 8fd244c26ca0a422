//! Runtime settings for REST access.
//!
//! Provided once through Leptos context so pages and the API layer read the
//! same base path and paging values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use kanban::{CONFIG_STATUS_ACTIVE, DEFAULT_FLOW_LIMIT, FlowQuery};

/// Client-side API configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST path, without a trailing slash.
    pub api_base: String,
    /// Flows requested per board load.
    pub page_size: u32,
    /// Config status used when listing configs for the filter and subtitles.
    pub config_status: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: "/api".to_owned(), page_size: DEFAULT_FLOW_LIMIT, config_status: CONFIG_STATUS_ACTIVE }
    }
}

impl ClientConfig {
    /// First-page flow query, optionally restricted to one config.
    #[must_use]
    pub fn flow_query(&self, config_id: Option<i64>) -> FlowQuery {
        FlowQuery { limit: self.page_size, offset: 0, config_id, status: None }
    }
}
