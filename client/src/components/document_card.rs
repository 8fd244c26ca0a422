//! Compact card for one document on the board.
//!
//! DESIGN
//! ======
//! Cards only report gestures (select, drag start/end) through callbacks;
//! whether a drop is legal is decided by the page against board state.

use kanban::UnifiedDocument;
use leptos::prelude::*;

use crate::components::status_badge::{StatusBadge, icon_class};
use crate::util::display::{FileKind, format_timestamp};

/// A selectable, optionally draggable document card.
#[component]
pub fn DocumentCard(
    document: UnifiedDocument,
    on_select: Callback<i64>,
    on_drag_start: Callback<i64>,
    on_drag_end: Callback<()>,
    /// True while a status update for this card is awaiting the backend.
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let id = document.id;
    let status = document.status;
    let config = status.config();
    let draggable = move || config.allow_drag_out && !busy.get();
    let file_kind = FileKind::from_file_type(document.file_type.as_deref());
    let created = format_timestamp(&document.created_at);
    let border = format!("border-left-color: {};", config.color);

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                if transfer.set_data("text/plain", &id.to_string()).is_err() {
                    leptos::logging::warn!("drag data rejected for document {id}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
        on_drag_start.run(id);
    };

    view! {
        <div
            class="document-card"
            class:document-card--draggable=draggable
            class:document-card--busy=move || busy.get()
            style=border
            draggable=move || if draggable() { "true" } else { "false" }
            on:dragstart=on_dragstart
            on:dragend=move |_| on_drag_end.run(())
            on:click=move |_| on_select.run(id)
        >
            <div class="document-card__header">
                <span class=icon_class(file_kind.icon()) style=format!("color: {};", file_kind.color())></span>
                <div class="document-card__titles">
                    <span class="document-card__title" title=document.title.clone()>{document.title.clone()}</span>
                    {document.subtitle.map(|subtitle| view! { <span class="document-card__subtitle">{subtitle}</span> })}
                </div>
            </div>
            {document.preview.map(|preview| view! { <p class="document-card__preview">{preview}</p> })}
            <div class="document-card__footer">
                <StatusBadge status=status/>
                <span class="document-card__created" title=created.clone()>{created.clone()}</span>
            </div>
        </div>
    }
}
