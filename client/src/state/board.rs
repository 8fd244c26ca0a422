//! Board data for the kanban page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the latest fetch (flows rebuilt into cards), the active filter, the
//! locally recorded review statuses, and the set of documents whose status
//! update is still awaiting the backend. Every method is synchronous; the
//! page owns the async calls and feeds their outcomes back in.
//!
//! DESIGN
//! ======
//! A drop is a two-step exchange: `plan_drop` validates and `begin_update`
//! marks the document in flight; the page then either calls the backend (for
//! plans that change the backend status) or commits straight away. Cards are
//! only moved by `commit_move`, so a failed request leaves the board as it
//! was.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashSet;

use kanban::{
    BoardStats, DocumentFilter, FlowConfig, FlowListResponse, KanbanColumn, KanbanStatus, MoveError,
    MovePlan, StatusOverrides, UnifiedDocument, build_columns, build_documents, plan_move,
};

/// Shared through context as `RwSignal<BoardState>`.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Cards from the most recent fetch, in backend order.
    pub documents: Vec<UnifiedDocument>,
    /// Active configs, used for subtitles and the config picker.
    pub configs: Vec<FlowConfig>,
    /// Backend total for the current query (may exceed `documents.len()`).
    pub total: u64,
    pub filter: DocumentFilter,
    pub loading: bool,
    pub error: Option<String>,
    /// True while an upload request is outstanding.
    pub uploading: bool,
    /// Documents with a status update awaiting the backend.
    pub in_flight: HashSet<i64>,
    pub overrides: StatusOverrides,
    /// Document shown in the detail drawer.
    pub selected: Option<i64>,
}

impl BoardState {
    #[must_use]
    pub fn with_overrides(overrides: StatusOverrides) -> Self {
        Self { overrides, ..Self::default() }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_configs(&mut self, configs: Vec<FlowConfig>) {
        self.configs = configs;
    }

    /// Rebuild every card from a fresh flow listing and re-apply local
    /// review statuses. Returns how many overrides were applied.
    pub fn apply_fetch(&mut self, flows: FlowListResponse) -> usize {
        self.total = flows.total;
        let mut documents = build_documents(flows.items, &self.configs);
        let applied = self.overrides.reconcile(&mut documents);
        self.documents = documents;
        self.loading = false;
        self.error = None;
        if self.selected.is_some_and(|id| self.document(id).is_none()) {
            self.selected = None;
        }
        applied
    }

    pub fn fail_fetch(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(format!("failed to load documents: {message}"));
    }

    #[must_use]
    pub fn document(&self, id: i64) -> Option<&UnifiedDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    #[must_use]
    pub fn selected_document(&self) -> Option<&UnifiedDocument> {
        self.selected.and_then(|id| self.document(id))
    }

    /// Columns card `id` may be dropped on.
    #[must_use]
    pub fn drop_targets(&self, id: i64) -> Vec<KanbanStatus> {
        if self.in_flight.contains(&id) {
            return Vec::new();
        }
        self.document(id).map(|doc| kanban::drop_targets(doc.status)).unwrap_or_default()
    }

    /// Validate dropping document `id` on column `to`.
    ///
    /// # Errors
    ///
    /// [`MoveError::InFlight`] while an earlier update for the document is
    /// pending, [`MoveError::UnknownDocument`] for an id not on the board,
    /// otherwise whatever [`plan_move`] reports.
    pub fn plan_drop(&self, id: i64, to: KanbanStatus) -> Result<MovePlan, MoveError> {
        if self.in_flight.contains(&id) {
            return Err(MoveError::InFlight(id));
        }
        let doc = self.document(id).ok_or(MoveError::UnknownDocument(id))?;
        plan_move(doc, to)
    }

    pub fn begin_update(&mut self, plan: &MovePlan) {
        self.in_flight.insert(plan.document_id);
    }

    /// Move the card and remember review statuses locally.
    pub fn commit_move(&mut self, plan: &MovePlan) {
        self.in_flight.remove(&plan.document_id);
        if let Some(doc) = self.documents.iter_mut().find(|doc| doc.id == plan.document_id) {
            doc.apply_move(plan);
        }
        self.overrides.record(plan);
        self.error = None;
    }

    /// Release the in-flight guard after a failed backend update.
    pub fn fail_move(&mut self, plan: &MovePlan, message: &str) {
        self.in_flight.remove(&plan.document_id);
        self.error = Some(format!("status update failed: {message}"));
    }

    #[must_use]
    pub fn is_in_flight(&self, id: i64) -> bool {
        self.in_flight.contains(&id)
    }

    /// Config new uploads are filed under; uploads need a config picked.
    #[must_use]
    pub fn upload_target(&self) -> Option<i64> {
        self.filter.config_id
    }

    pub fn start_upload(&mut self) {
        self.uploading = true;
        self.error = None;
    }

    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    pub fn fail_upload(&mut self, message: &str) {
        self.uploading = false;
        self.error = Some(format!("upload failed: {message}"));
    }

    pub fn reject_move(&mut self, error: &MoveError) {
        self.error = Some(error.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Cards that pass the current filter.
    #[must_use]
    pub fn visible_documents(&self) -> Vec<UnifiedDocument> {
        self.filter.apply(&self.documents)
    }

    /// Visible cards for one column, in backend order.
    #[must_use]
    pub fn column_documents(&self, status: KanbanStatus) -> Vec<UnifiedDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.status == status && self.filter.matches(doc))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn columns(&self) -> Vec<KanbanColumn> {
        build_columns(self.visible_documents())
    }

    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_documents(&self.visible_documents())
    }
}
