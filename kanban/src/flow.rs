//! Wire DTOs for the document backend's flow and config endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads (snake_case field names) and
//! decode leniently: optional blocks may be missing or `null`, and unknown
//! fields are ignored, so older or newer backends do not break the board.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::status::BackendStatus;

/// `config.status` value for configs that accept new uploads.
pub const CONFIG_STATUS_ACTIVE: i64 = 1;
/// `config.status` value for retired configs.
pub const CONFIG_STATUS_ARCHIVED: i64 = 2;

/// Source file and extracted text attached to a flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentContext {
    /// Storage path of the uploaded file.
    pub file_path: Option<String>,
    /// Original upload file name.
    pub file_name: Option<String>,
    /// File kind (`pdf`, `excel`, `image`).
    pub file_type: Option<String>,
    /// Free text extracted from the document.
    pub text: Option<String>,
    /// Page count for paged formats.
    pub pages: Option<u32>,
}

/// Latest extraction result for a flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    pub id: i64,
    pub flow_id: i64,
    /// Extracted field values keyed by schema field name.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Blocks the extractor read; absent on results that predate block tracking.
    /// Block shapes vary by extractor, so only the count is relied on.
    pub text_blocks: Option<Vec<serde_json::Value>>,
    /// Monotonic result version; bumped on every correction.
    pub version: i64,
    pub updated_at: Option<String>,
}

/// A document-type config (schema + prompt settings) that owns flows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub domain: Option<String>,
    #[serde(default)]
    pub schema_id: i64,
    #[serde(default)]
    pub version: i64,
    /// [`CONFIG_STATUS_ACTIVE`] or [`CONFIG_STATUS_ARCHIVED`].
    #[serde(default = "default_config_status")]
    pub status: i64,
}

impl FlowConfig {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CONFIG_STATUS_ACTIVE
    }
}

/// Extraction schema summary embedded on detailed flow payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowSchema {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: i64,
}

/// One document's extraction lifecycle as returned by `GET /api/flows`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: i64,
    pub config_id: i64,
    #[serde(default)]
    pub config_version: i64,
    #[serde(default)]
    pub schema_id: i64,
    #[serde(default)]
    pub schema_version: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_context: ContentContext,
    pub langsmith_trace_id: Option<String>,
    #[serde(default)]
    pub main_status: BackendStatus,
    #[serde(default)]
    pub created_at: String,
    pub updated_at: Option<String>,
    pub result: Option<FlowResult>,
    /// Owning config, only embedded by some endpoints.
    pub config: Option<FlowConfig>,
    pub schema: Option<FlowSchema>,
}

/// Paged list envelope (`{ "items": [...], "total": n }`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}

pub type FlowListResponse = ListResponse<Flow>;
pub type ConfigListResponse = ListResponse<FlowConfig>;

fn default_config_status() -> i64 {
    CONFIG_STATUS_ACTIVE
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
