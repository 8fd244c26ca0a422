//! Side drawer with metadata and extracted fields for the selected card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the selected document from board state and the open tab from UI
//! state. The drawer closes itself when the selected card disappears after a
//! refetch.

#[cfg(test)]
#[path = "detail_drawer_test.rs"]
mod detail_drawer_test;

use kanban::UnifiedDocument;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::state::board::BoardState;
use crate::state::ui::{DrawerTab, UiState};
use crate::util::display::{ExtractedField, extracted_fields, format_timestamp, or_dash, short_trace_id};

/// Document detail drawer.
#[component]
pub fn DetailDrawer() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api_base = StoredValue::new(expect_context::<ClientConfig>().api_base);

    let selected = move || board.with(|b| b.selected_document().cloned());
    let open = move || ui.with(|u| u.drawer_open) && board.with(|b| b.selected_document().is_some());
    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_drawer);
    let tab = move || ui.with(|u| u.drawer_tab);

    view! {
        <Show when=open>
            <aside class="detail-drawer">
                <header class="detail-drawer__header">
                    <span class="detail-drawer__title">
                        {move || selected().map(|doc| doc.title).unwrap_or_default()}
                    </span>
                    <button class="btn detail-drawer__close" on:click=close title="Close" aria-label="Close">
                        "✕"
                    </button>
                </header>
                <nav class="detail-drawer__tabs">
                    <button
                        class="detail-drawer__tab"
                        class:detail-drawer__tab--active=move || tab() == DrawerTab::Info
                        on:click=move |_| ui.update(|u| u.drawer_tab = DrawerTab::Info)
                    >
                        "Info"
                    </button>
                    <button
                        class="detail-drawer__tab"
                        class:detail-drawer__tab--active=move || tab() == DrawerTab::Data
                        on:click=move |_| ui.update(|u| u.drawer_tab = DrawerTab::Data)
                    >
                        "Extracted data"
                    </button>
                </nav>
                <div class="detail-drawer__body">
                    {move || {
                        let Some(doc) = selected() else {
                            return ().into_any();
                        };
                        match tab() {
                            DrawerTab::Info => info_table(&doc).into_any(),
                            DrawerTab::Data => data_table(&doc).into_any(),
                        }
                    }}
                </div>
                <footer class="detail-drawer__footer">
                    <a
                        class="btn"
                        target="_blank"
                        rel="noopener"
                        href=move || selected().map(|doc| api_base.with_value(|base| flow_href(base, doc.id))).unwrap_or_default()
                    >
                        "Open flow record"
                    </a>
                </footer>
            </aside>
        </Show>
    }
}

fn info_table(doc: &UnifiedDocument) -> impl IntoView + use<> {
    let rows = info_rows(doc)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <tr>
                    <th>{label}</th>
                    <td>{value}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <table class="detail-drawer__info">
            <tr>
                <th>"Status"</th>
                <td><StatusBadge status=doc.status show_icon=true/></td>
            </tr>
            {rows}
        </table>
    }
}

fn data_table(doc: &UnifiedDocument) -> impl IntoView + use<> {
    let fields = doc.raw.result.as_ref().map(|result| extracted_fields(&result.data)).unwrap_or_default();
    if fields.is_empty() {
        return view! { <p class="detail-drawer__empty">"No extracted data"</p> }.into_any();
    }
    let rows = fields
        .into_iter()
        .map(|ExtractedField { field, value, source }| {
            view! {
                <tr>
                    <td>{field}</td>
                    <td>{value}</td>
                    <td><span class="tag" data-source=source.label()>{source.label()}</span></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <table class="detail-drawer__data">
            <tr>
                <th>"Field"</th>
                <th>"Value"</th>
                <th>"Source"</th>
            </tr>
            {rows}
        </table>
    }
    .into_any()
}

/// Label/value pairs for the info tab, in display order.
pub(crate) fn info_rows(doc: &UnifiedDocument) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Document ID", doc.id.to_string()),
        ("File name", doc.title.clone()),
        ("Document type", or_dash(doc.subtitle.as_deref())),
        ("Backend status", doc.original_status.label().to_owned()),
        ("File type", or_dash(doc.file_type.as_deref())),
        ("Pages", or_dash(doc.page_count)),
        ("Text blocks", or_dash(doc.block_count)),
        ("Result version", format!("v{}", doc.version.unwrap_or(1))),
        ("Created", format_timestamp(&doc.created_at)),
        ("Updated", or_dash(doc.updated_at.as_deref().map(format_timestamp))),
    ];
    if let Some(trace_id) = doc.trace_id.as_deref() {
        rows.push(("Trace ID", short_trace_id(trace_id)));
    }
    rows
}

/// Backend flow resource, including its latest result.
pub(crate) fn flow_href(api_base: &str, id: i64) -> String {
    kanban::flow_path(api_base, id)
}
