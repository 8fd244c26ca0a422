//! Flattened, display-ready document cards built from backend flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are rebuilt from scratch on every list fetch. They are never mutated
//! to push state to the server; `apply_move` only updates the local projection
//! after a move plan has been accepted.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flow::{Flow, FlowConfig};
use crate::status::{BackendStatus, KanbanStatus, to_kanban_status};
use crate::transition::MovePlan;

/// Maximum preview length in characters.
pub const PREVIEW_CHARS: usize = 100;

/// View model for one kanban card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnifiedDocument {
    pub id: i64,
    /// File name, or `Flow #<id>` when the upload has no name.
    pub title: String,
    /// Name of the owning config.
    pub subtitle: Option<String>,
    /// Leading slice of the extracted text.
    pub preview: Option<String>,
    /// Column the card is rendered in.
    pub status: KanbanStatus,
    /// Backend status the card was built from (or last moved to).
    pub original_status: BackendStatus,
    pub config_id: Option<i64>,
    pub config_name: Option<String>,
    pub schema_name: Option<String>,
    /// Extraction result version.
    pub version: Option<i64>,
    pub file_type: Option<String>,
    pub page_count: Option<u32>,
    pub trace_id: Option<String>,
    /// Number of extracted text blocks.
    pub block_count: Option<usize>,
    pub created_at: String,
    pub updated_at: Option<String>,
    /// Source record, kept for detail views.
    pub raw: Flow,
}

impl UnifiedDocument {
    /// Project a flow (and optionally its separately fetched config) into a card.
    #[must_use]
    pub fn from_flow(flow: Flow, config: Option<&FlowConfig>) -> Self {
        let context = &flow.content_context;
        let title = non_empty(context.file_name.as_deref())
            .map_or_else(|| format!("Flow #{}", flow.id), str::to_owned);
        let config_name = config
            .and_then(|c| non_empty(Some(c.name.as_str())))
            .or_else(|| flow.config.as_ref().and_then(|c| non_empty(Some(c.name.as_str()))))
            .map(str::to_owned);
        let preview = non_empty(context.text.as_deref()).map(|text| truncate_chars(text, PREVIEW_CHARS));

        Self {
            id: flow.id,
            title,
            subtitle: config_name.clone(),
            preview,
            status: to_kanban_status(flow.main_status),
            original_status: flow.main_status,
            config_id: Some(flow.config_id),
            config_name,
            schema_name: flow.schema.as_ref().map(|s| s.name.clone()),
            version: flow.result.as_ref().map(|r| r.version),
            file_type: context.file_type.clone(),
            page_count: context.pages,
            trace_id: flow.langsmith_trace_id.clone(),
            block_count: flow
                .result
                .as_ref()
                .and_then(|r| r.text_blocks.as_ref())
                .map(Vec::len),
            created_at: flow.created_at.clone(),
            updated_at: flow.updated_at.clone(),
            raw: flow,
        }
    }

    /// Move the card to the plan's target column.
    pub fn apply_move(&mut self, plan: &MovePlan) {
        self.status = plan.to;
        self.original_status = plan.backend;
    }
}

/// Build cards for a fetched page, resolving each flow's config by id.
#[must_use]
pub fn build_documents(flows: Vec<Flow>, configs: &[FlowConfig]) -> Vec<UnifiedDocument> {
    let by_id: HashMap<i64, &FlowConfig> = configs.iter().map(|c| (c.id, c)).collect();
    flows
        .into_iter()
        .map(|flow| {
            let config = by_id.get(&flow.config_id).copied();
            UnifiedDocument::from_flow(flow, config)
        })
        .collect()
}

/// Hard character-count slice; not word-boundary aware.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_owned(),
        None => text.to_owned(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
