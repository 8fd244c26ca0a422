//! One status column with its header, cards, and drop zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! While a card is dragged, the column highlights itself when it is one of
//! the dragged card's drop targets. Dropping is forwarded to the page, which
//! plans the move against the full board state. Cards are keyed by
//! `card_key`, so board updates only touch cards whose data changed.

#[cfg(test)]
#[path = "board_column_test.rs"]
mod board_column_test;

use kanban::{KanbanStatus, StatusConfig, UnifiedDocument};
use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::state::board::BoardState;
use crate::state::drag::DragState;

/// A single board column.
#[component]
pub fn BoardColumn(
    status: KanbanStatus,
    on_drop: Callback<KanbanStatus>,
    on_select: Callback<i64>,
    on_drag_start: Callback<i64>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let drag = expect_context::<RwSignal<DragState>>();

    let config = status.config();
    let documents = Memo::new(move |_| board.with(|b| b.column_documents(status)));
    let accepts = move || {
        drag.with(|d| d.dragging)
            .is_some_and(|id| board.with(|b| b.drop_targets(id).contains(&status)))
    };
    let hovered = move || drag.with(|d| d.over == Some(status));

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        let accepted = drag
            .with_untracked(|d| d.dragging)
            .is_some_and(|id| board.with_untracked(|b| b.drop_targets(id).contains(&status)));
        if !accepted {
            return;
        }
        ev.prevent_default();
        if drag.with_untracked(|d| d.over != Some(status)) {
            drag.update(|d| d.hover(status));
        }
    };
    let on_dragleave = move |_: leptos::ev::DragEvent| {
        if drag.with_untracked(|d| d.over == Some(status)) {
            drag.update(|d| d.leave(status));
        }
    };
    let on_drop_event = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        on_drop.run(status);
    };

    view! {
        <section
            class="board-column"
            class:board-column--droppable=accepts
            class:board-column--hover=hovered
            data-status=status.as_str()
            style=move || column_style(config, hovered())
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_event
        >
            <header class="board-column__header" style=header_style(config)>
                <span class="board-column__label">{config.label}</span>
                <span class="board-column__count">{move || documents.with(Vec::len)}</span>
            </header>
            <div class="board-column__cards">
                <Show when=move || documents.with(Vec::is_empty)>
                    <p class="board-column__empty">"No documents"</p>
                </Show>
                <For
                    each=move || documents.get()
                    key=card_key
                    children=move |document: UnifiedDocument| {
                        let id = document.id;
                        let busy = Signal::derive(move || board.with(|b| b.is_in_flight(id)));
                        view! {
                            <DocumentCard
                                document=document
                                on_select=on_select
                                on_drag_start=on_drag_start
                                on_drag_end=on_drag_end
                                busy=busy
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}

/// Identity of a rendered card. Unchanged cards keep their DOM node across
/// board updates.
pub(crate) fn card_key(document: &UnifiedDocument) -> (i64, KanbanStatus, Option<String>) {
    (document.id, document.status, document.updated_at.clone())
}

pub(crate) fn column_style(config: &StatusConfig, hovered: bool) -> String {
    if hovered {
        format!("background-color: {}; border: 2px dashed {};", config.bg_color, config.color)
    } else {
        "background-color: #f5f5f5; border: 2px solid transparent;".to_owned()
    }
}

pub(crate) fn header_style(config: &StatusConfig) -> String {
    format!("border-bottom: 3px solid {}; background-color: {}; color: {};", config.color, config.bg_color, config.color)
}
