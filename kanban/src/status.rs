//! Status projection between backend flow states and kanban columns.
//!
//! DESIGN
//! ======
//! The backend models four coarse processing states. The board splits the
//! backend `Completed` state into three review buckets, so mapping a column
//! back to the backend is lossy. Drag gating reads two independent tables:
//! per-column capability flags and a per-source adjacency list. A move has to
//! pass both.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-owned processing state of a flow (`main_status` on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendStatus {
    /// Uploaded, waiting for the pipeline.
    #[default]
    Pending,
    /// OCR/LLM extraction running.
    InProgress,
    /// Extraction finished.
    Completed,
    /// Extraction failed.
    Failed,
}

impl BackendStatus {
    /// Every backend status in wire-code order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Completed, Self::Failed];

    /// Integer code used by the backend.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Failed => 3,
        }
    }

    /// Strict lookup of a wire code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Completed),
            3 => Some(Self::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for BackendStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Unknown codes decode as `Pending` so one odd record cannot fail a whole
/// list payload.
impl<'de> Deserialize<'de> for BackendStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Ok(Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code, "unrecognized main_status code, treating as pending");
            Self::Pending
        }))
    }
}

/// Six-bucket board status. Declaration order is column display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanbanStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Reviewing,
    Confirmed,
    Failed,
}

impl KanbanStatus {
    /// All statuses in column display order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Processing,
        Self::Completed,
        Self::Reviewing,
        Self::Confirmed,
        Self::Failed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Reviewing => "reviewing",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
        }
    }

    /// Static display/drag descriptor for this column.
    #[must_use]
    pub fn config(self) -> &'static StatusConfig {
        &STATUS_CONFIGS[self as usize]
    }

    /// True for the client-only review buckets with no backend counterpart.
    #[must_use]
    pub fn is_review_state(self) -> bool {
        matches!(self, Self::Reviewing | Self::Confirmed)
    }
}

impl fmt::Display for KanbanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kanban status name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown kanban status `{0}` (expected one of pending, processing, completed, reviewing, confirmed, failed)")]
pub struct ParseStatusError(pub String);

impl FromStr for KanbanStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == name)
            .ok_or_else(|| ParseStatusError(s.to_owned()))
    }
}

/// Per-column display and drag capability descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusConfig {
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
    /// Icon identifier understood by the UI layer.
    pub icon: &'static str,
    /// Cards may be dropped into this column.
    pub allow_drag_in: bool,
    /// Cards may be dragged out of this column.
    pub allow_drag_out: bool,
}

// Indexed by `KanbanStatus as usize`; keep in declaration order.
static STATUS_CONFIGS: [StatusConfig; 6] = [
    StatusConfig {
        label: "Pending",
        color: "#8c8c8c",
        bg_color: "#fafafa",
        icon: "clock-circle",
        allow_drag_in: true,
        allow_drag_out: false,
    },
    StatusConfig {
        label: "Processing",
        color: "#1890ff",
        bg_color: "#e6f7ff",
        icon: "loading",
        allow_drag_in: false,
        allow_drag_out: false,
    },
    StatusConfig {
        label: "Completed",
        color: "#52c41a",
        bg_color: "#f6ffed",
        icon: "check-circle",
        allow_drag_in: false,
        allow_drag_out: true,
    },
    StatusConfig {
        label: "Reviewing",
        color: "#fa8c16",
        bg_color: "#fff7e6",
        icon: "eye",
        allow_drag_in: true,
        allow_drag_out: true,
    },
    StatusConfig {
        label: "Confirmed",
        color: "#13c2c2",
        bg_color: "#e6fffb",
        icon: "check-square",
        allow_drag_in: true,
        allow_drag_out: false,
    },
    StatusConfig {
        label: "Failed",
        color: "#ff4d4f",
        bg_color: "#fff1f0",
        icon: "close-circle",
        allow_drag_in: false,
        allow_drag_out: true,
    },
];

/// Default board column for a backend status. Never yields a review bucket.
#[must_use]
pub fn to_kanban_status(backend: BackendStatus) -> KanbanStatus {
    match backend {
        BackendStatus::Pending => KanbanStatus::Pending,
        BackendStatus::InProgress => KanbanStatus::Processing,
        BackendStatus::Completed => KanbanStatus::Completed,
        BackendStatus::Failed => KanbanStatus::Failed,
    }
}

/// Board column for a raw wire code; unrecognized codes land in `Pending`.
#[must_use]
pub fn kanban_status_for_code(code: i64) -> KanbanStatus {
    BackendStatus::from_code(code).map_or(KanbanStatus::Pending, to_kanban_status)
}

/// Backend status to submit for a board column.
///
/// `None` means the column has no backend representation and the caller must
/// not contact the status-update endpoint.
#[must_use]
#[allow(clippy::unnecessary_wraps)]
pub fn to_backend_status(kanban: KanbanStatus) -> Option<BackendStatus> {
    match kanban {
        KanbanStatus::Pending => Some(BackendStatus::Pending),
        KanbanStatus::Processing => Some(BackendStatus::InProgress),
        KanbanStatus::Completed | KanbanStatus::Reviewing | KanbanStatus::Confirmed => {
            Some(BackendStatus::Completed)
        }
        KanbanStatus::Failed => Some(BackendStatus::Failed),
    }
}

/// Adjacency table: columns a card may move to from `from`.
#[must_use]
pub fn permitted_targets(from: KanbanStatus) -> &'static [KanbanStatus] {
    match from {
        // Pending/Processing are driven by the pipeline; Confirmed is terminal.
        KanbanStatus::Pending | KanbanStatus::Processing | KanbanStatus::Confirmed => &[],
        KanbanStatus::Completed => &[KanbanStatus::Reviewing, KanbanStatus::Confirmed],
        KanbanStatus::Reviewing => &[KanbanStatus::Confirmed],
        // Manual retry.
        KanbanStatus::Failed => &[KanbanStatus::Pending],
    }
}

/// Whether a card may be dragged from `from` to `to`.
#[must_use]
pub fn is_transition_allowed(from: KanbanStatus, to: KanbanStatus) -> bool {
    if !from.config().allow_drag_out || !to.config().allow_drag_in {
        return false;
    }
    permitted_targets(from).contains(&to)
}

/// Columns that accept a card currently in `from`, in display order.
#[must_use]
pub fn drop_targets(from: KanbanStatus) -> Vec<KanbanStatus> {
    KanbanStatus::ALL
        .into_iter()
        .filter(|to| is_transition_allowed(from, *to))
        .collect()
}
