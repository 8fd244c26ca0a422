//! In-progress drag gesture.
//!
//! DESIGN
//! ======
//! Lives in its own signal. Card lists read only board data, so starting,
//! hovering, or ending a drag never re-renders the card being dragged.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use kanban::KanbanStatus;

/// Shared through context as `RwSignal<DragState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Document currently being dragged.
    pub dragging: Option<i64>,
    /// Column under the pointer.
    pub over: Option<KanbanStatus>,
}

impl DragState {
    pub fn begin(&mut self, id: i64) {
        self.dragging = Some(id);
        self.over = None;
    }

    pub fn hover(&mut self, status: KanbanStatus) {
        self.over = Some(status);
    }

    /// Clear the hover only if the pointer left the highlighted column.
    pub fn leave(&mut self, status: KanbanStatus) {
        if self.over == Some(status) {
            self.over = None;
        }
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}
