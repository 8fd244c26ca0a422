//! Column grouping, upstream filtering, and per-status counts.
//!
//! Filtering runs before grouping; grouping itself never drops, reorders, or
//! dedups cards.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::BTreeMap;

use crate::document::UnifiedDocument;
use crate::status::{KanbanStatus, StatusConfig};

/// Partition cards by column. Every status key is present; input order is
/// preserved within each column.
#[must_use]
pub fn group_by_status<I>(documents: I) -> BTreeMap<KanbanStatus, Vec<UnifiedDocument>>
where
    I: IntoIterator<Item = UnifiedDocument>,
{
    let mut grouped: BTreeMap<KanbanStatus, Vec<UnifiedDocument>> =
        KanbanStatus::ALL.into_iter().map(|status| (status, Vec::new())).collect();
    for doc in documents {
        grouped.entry(doc.status).or_default().push(doc);
    }
    grouped
}

/// One rendered board column.
#[derive(Clone, Debug, PartialEq)]
pub struct KanbanColumn {
    pub status: KanbanStatus,
    pub config: &'static StatusConfig,
    pub documents: Vec<UnifiedDocument>,
    pub count: usize,
}

/// All six columns in display order.
#[must_use]
pub fn build_columns<I>(documents: I) -> Vec<KanbanColumn>
where
    I: IntoIterator<Item = UnifiedDocument>,
{
    group_by_status(documents)
        .into_iter()
        .map(|(status, documents)| KanbanColumn {
            status,
            config: status.config(),
            count: documents.len(),
            documents,
        })
        .collect()
}

/// Board filters applied before grouping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Keep only cards owned by this config.
    pub config_id: Option<i64>,
    /// Case-insensitive match on title, subtitle, or preview.
    pub search_text: String,
    /// Inclusive `YYYY-MM-DD` bounds on the creation date.
    pub date_range: Option<(String, String)>,
}

impl DocumentFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config_id.is_none() && self.search_text.trim().is_empty() && self.date_range.is_none()
    }

    #[must_use]
    pub fn matches(&self, doc: &UnifiedDocument) -> bool {
        if let Some(config_id) = self.config_id {
            if doc.config_id != Some(config_id) {
                return false;
            }
        }
        if let Some((from, to)) = &self.date_range {
            let day = date_prefix(&doc.created_at);
            if day < from.as_str() || day > to.as_str() {
                return false;
            }
        }
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(doc.title.as_str()), doc.subtitle.as_deref(), doc.preview.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching cards, cloned, in input order.
    #[must_use]
    pub fn apply(&self, documents: &[UnifiedDocument]) -> Vec<UnifiedDocument> {
        documents.iter().filter(|doc| self.matches(doc)).cloned().collect()
    }
}

/// Card counts per column for the stats strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardStats {
    pub counts: BTreeMap<KanbanStatus, usize>,
    pub total: usize,
}

impl BoardStats {
    #[must_use]
    pub fn from_documents(documents: &[UnifiedDocument]) -> Self {
        let mut counts: BTreeMap<KanbanStatus, usize> =
            KanbanStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        for doc in documents {
            *counts.entry(doc.status).or_default() += 1;
        }
        Self {
            counts,
            total: documents.len(),
        }
    }

    #[must_use]
    pub fn count(&self, status: KanbanStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }
}

fn date_prefix(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
