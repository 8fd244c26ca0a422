//! Drag-and-drop move planning.
//!
//! ERROR HANDLING
//! ==============
//! A rejected move is final: callers surface the error and leave the card
//! where it was. They never retry with a different status or substitute a
//! default backend value.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::document::UnifiedDocument;
use crate::status::{BackendStatus, KanbanStatus, is_transition_allowed, to_backend_status};

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("document is already in {0}")]
    SameStatus(KanbanStatus),
    #[error("cannot move a document from {from} to {to}")]
    NotAllowed { from: KanbanStatus, to: KanbanStatus },
    #[error("{0} has no backend status")]
    NoBackendStatus(KanbanStatus),
    #[error("a status update for document {0} is still in flight")]
    InFlight(i64),
    #[error("document {0} is not on the board")]
    UnknownDocument(i64),
}

/// An accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePlan {
    pub document_id: i64,
    pub from: KanbanStatus,
    pub to: KanbanStatus,
    /// Backend status the target column collapses to.
    pub backend: BackendStatus,
    /// True when the backend must be told; false for review-only moves.
    pub backend_changed: bool,
}

/// Validate moving `document` to `to`.
///
/// # Errors
///
/// Returns [`MoveError::SameStatus`] for a drop onto the current column,
/// [`MoveError::NotAllowed`] when either drag gate refuses, and
/// [`MoveError::NoBackendStatus`] when the target has no backend value.
pub fn plan_move(document: &UnifiedDocument, to: KanbanStatus) -> Result<MovePlan, MoveError> {
    let from = document.status;
    if from == to {
        return Err(MoveError::SameStatus(to));
    }
    if !is_transition_allowed(from, to) {
        tracing::debug!(document_id = document.id, %from, %to, "move rejected");
        return Err(MoveError::NotAllowed { from, to });
    }
    let Some(backend) = to_backend_status(to) else {
        tracing::debug!(document_id = document.id, %to, "target has no backend status");
        return Err(MoveError::NoBackendStatus(to));
    };
    Ok(MovePlan {
        document_id: document.id,
        from,
        to,
        backend,
        backend_changed: backend != document.original_status,
    })
}
