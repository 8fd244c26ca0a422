//! Locally recorded review states that survive a refresh.
//!
//! DESIGN
//! ======
//! The backend only knows `Completed`, so a card moved to `Reviewing` or
//! `Confirmed` would snap back on the next fetch. The store keeps those moves
//! keyed by document id. On reconcile the backend wins for every state except
//! `Completed`: an override only applies while the backend still reports the
//! flow as completed, and is dropped as soon as the backend reports anything
//! else (for example a reprocess moved it back to pending).

#[cfg(test)]
#[path = "overrides_test.rs"]
mod overrides_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::UnifiedDocument;
use crate::status::{BackendStatus, KanbanStatus};
use crate::transition::MovePlan;

/// Document id to locally advanced review status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusOverrides {
    entries: BTreeMap<i64, KanbanStatus>,
}

impl StatusOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, document_id: i64) -> Option<KanbanStatus> {
        self.entries.get(&document_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remember an accepted move. Only review buckets are stored; any other
    /// target clears the document's entry.
    pub fn record(&mut self, plan: &MovePlan) {
        if plan.to.is_review_state() {
            self.entries.insert(plan.document_id, plan.to);
        } else {
            self.entries.remove(&plan.document_id);
        }
    }

    /// Apply stored review states to freshly built cards.
    ///
    /// Entries for documents missing from `documents` are kept, since the
    /// fetch may be filtered or paged. Returns how many cards were changed.
    pub fn reconcile(&mut self, documents: &mut [UnifiedDocument]) -> usize {
        let mut applied = 0;
        for doc in documents.iter_mut() {
            let Some(status) = self.get(doc.id) else {
                continue;
            };
            if doc.original_status == BackendStatus::Completed && status.is_review_state() {
                doc.status = status;
                applied += 1;
            } else {
                tracing::debug!(document_id = doc.id, backend = %doc.original_status, "dropping stale status override");
                self.entries.remove(&doc.id);
            }
        }
        applied
    }
}
