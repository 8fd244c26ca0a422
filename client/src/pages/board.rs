//! Kanban board page: filters, stats, six status columns, detail drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads configs and the first page of flows on
//! mount, refetches when the config filter changes, on refresh, and after an
//! upload, and turns drops into status updates.
//!
//! Columns are rendered once; each column keys its own cards. The dragged
//! card id lives in the `DragState` signal, so a drag never rebuilds cards.
//!
//! ERROR HANDLING
//! ==============
//! Rejected moves and failed requests surface in the error banner. A card is
//! moved only after its update succeeds; review-only moves never reach the
//! backend and are committed immediately.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use kanban::{KanbanStatus, MoveError, MovePlan};
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::components::board_column::BoardColumn;
use crate::components::detail_drawer::DetailDrawer;
use crate::components::stats_overview::StatsOverview;
use crate::config::ClientConfig;
use crate::state::board::BoardState;
use crate::state::drag::DragState;
use crate::state::ui::UiState;
use crate::util::ui_persistence::save_overrides;

/// Board page with toolbar, stats strip, and columns.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let drag = expect_context::<RwSignal<DragState>>();
    let config = expect_context::<ClientConfig>();

    load_board(config.clone(), board, true);

    let refresh_config = config.clone();
    let on_refresh = move |_: leptos::ev::MouseEvent| load_board(refresh_config.clone(), board, false);

    let config_change = config.clone();
    let on_config_change = move |ev: leptos::ev::Event| {
        let config_id = parse_config_choice(&event_target_value(&ev));
        board.update(|b| b.filter.config_id = config_id);
        load_board(config_change.clone(), board, false);
    };

    let on_search = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        board.update(|b| b.filter.search_text = text);
    };

    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    Effect::new(move || {
        let range = date_range(&date_from.get(), &date_to.get());
        if board.with_untracked(|b| b.filter.date_range != range) {
            board.update(|b| b.filter.date_range = range);
        }
    });

    let on_select = Callback::new(move |id: i64| {
        board.update(|b| b.selected = Some(id));
        ui.update(UiState::open_drawer);
    });
    let on_drag_start = Callback::new(move |id: i64| {
        drag.update(|d| d.begin(id));
        if ui.with_untracked(|u| u.notice.is_some()) {
            ui.update(|u| u.notice = None);
        }
    });
    let on_drag_end = Callback::new(move |()| drag.update(DragState::end));
    let drop_config = config.clone();
    let on_drop = Callback::new(move |to: KanbanStatus| handle_drop(drop_config.clone(), board, drag, ui, to));

    let upload_config = config.clone();
    let on_upload = move |ev: leptos::ev::Event| {
        let Some(config_id) = board.with_untracked(BoardState::upload_target) else {
            board.update(|b| b.error = Some(UPLOAD_NEEDS_CONFIG.to_owned()));
            return;
        };
        upload_files(upload_config.clone(), board, ui, config_id, &ev);
    };
    let upload_disabled = move || board.with(|b| b.upload_target().is_none() || b.uploading);

    let config_options = move || {
        board.with(|b| {
            b.configs
                .iter()
                .map(|c| view! { <option value=c.id.to_string()>{c.name.clone()}</option> })
                .collect::<Vec<_>>()
        })
    };

    let columns = KanbanStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <BoardColumn
                    status=status
                    on_drop=on_drop
                    on_select=on_select
                    on_drag_start=on_drag_start
                    on_drag_end=on_drag_end
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="board-page">
            <header class="board-page__header toolbar">
                <span class="toolbar__title">"Document Board"</span>
                <span class="toolbar__spacer"></span>
                <select class="toolbar__config" on:change=on_config_change>
                    <option value="">"All document types"</option>
                    {config_options}
                </select>
                <input
                    class="toolbar__search"
                    type="search"
                    placeholder="Search documents..."
                    on:input=on_search
                />
                <input
                    class="toolbar__date"
                    type="date"
                    title="Created from"
                    on:input=move |ev| date_from.set(event_target_value(&ev))
                />
                <input
                    class="toolbar__date"
                    type="date"
                    title="Created to"
                    on:input=move |ev| date_to.set(event_target_value(&ev))
                />
                <label
                    class="btn toolbar__upload"
                    class:btn--disabled=upload_disabled
                    title=move || if board.with(|b| b.upload_target().is_none()) { UPLOAD_NEEDS_CONFIG } else { "Upload documents" }
                >
                    {move || if board.with(|b| b.uploading) { "Uploading..." } else { "Upload" }}
                    <input
                        class="toolbar__upload-input"
                        type="file"
                        multiple=true
                        accept=UPLOAD_ACCEPT
                        hidden=true
                        disabled=upload_disabled
                        on:change=on_upload
                    />
                </label>
                <button class="btn toolbar__refresh" on:click=on_refresh disabled=move || board.with(|b| b.loading)>
                    "Refresh"
                </button>
            </header>

            <Show when=move || board.with(|b| b.error.is_some())>
                <p class="board-page__error" on:click=move |_| board.update(BoardState::dismiss_error)>
                    {move || board.with(|b| b.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || ui.with(|u| u.notice.is_some())>
                <p class="board-page__notice" on:click=move |_| ui.update(|u| u.notice = None)>
                    {move || ui.with(|u| u.notice.clone().unwrap_or_default())}
                </p>
            </Show>

            <StatsOverview/>

            <div class="board-page__columns" class:board-page__columns--loading=move || board.with(|b| b.loading)>
                {columns}
            </div>

            <DetailDrawer/>
        </div>
    }
}

/// Fetch flows (and optionally configs first, for subtitles) into board state.
fn load_board(config: ClientConfig, board: RwSignal<BoardState>, include_configs: bool) {
    board.update(BoardState::start_loading);
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if include_configs {
                match crate::net::api::list_configs(&config).await {
                    Ok(resp) => board.update(|b| b.set_configs(resp.items)),
                    Err(e) => warn!("failed to load configs: {e}"),
                }
            }
            let config_id = board.with_untracked(|b| b.filter.config_id);
            match crate::net::api::list_flows(&config, config_id).await {
                Ok(resp) => {
                    let count = resp.items.len();
                    let mut applied = 0;
                    board.update(|b| applied = b.apply_fetch(resp));
                    board.with_untracked(|b| save_overrides(&b.overrides));
                    log!("loaded {count} documents ({applied} review overrides)");
                }
                Err(e) => {
                    warn!("failed to load documents: {e}");
                    board.update(|b| b.fail_fetch(&e));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, include_configs);
    }
}

fn handle_drop(
    config: ClientConfig,
    board: RwSignal<BoardState>,
    drag: RwSignal<DragState>,
    ui: RwSignal<UiState>,
    to: KanbanStatus,
) {
    let Some(id) = drag.with_untracked(|d| d.dragging) else {
        return;
    };
    drag.update(DragState::end);

    let plan = match board.with_untracked(|b| b.plan_drop(id, to)) {
        Ok(plan) => plan,
        Err(MoveError::SameStatus(_)) => return,
        Err(e) => {
            warn!("move rejected: {e}");
            board.update(|b| b.reject_move(&e));
            return;
        }
    };
    board.update(|b| b.begin_update(&plan));

    if !plan.backend_changed {
        finish_move(board, ui, &plan);
        return;
    }

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::update_flow_status(&config, plan.document_id, plan.backend).await {
                Ok(()) => finish_move(board, ui, &plan),
                Err(e) => {
                    warn!("status update for document {} failed: {e}", plan.document_id);
                    board.update(|b| b.fail_move(&plan, &e));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        board.update(|b| b.fail_move(&plan, "not available outside the browser"));
    }
}

/// Send the files picked in the upload input, then refetch the board.
fn upload_files(
    config: ClientConfig,
    board: RwSignal<BoardState>,
    ui: RwSignal<UiState>,
    config_id: i64,
    ev: &leptos::ev::Event,
) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(files) = input.files().filter(|files| files.length() > 0) else {
            return;
        };
        board.update(BoardState::start_upload);
        leptos::task::spawn_local(async move {
            match crate::net::api::upload_flows(&config, config_id, &files).await {
                Ok(count) => {
                    log!("uploaded {count} documents to config {config_id}");
                    board.update(BoardState::finish_upload);
                    ui.update(|u| u.notice = Some(upload_notice(count)));
                    load_board(config, board, false);
                }
                Err(e) => {
                    warn!("upload to config {config_id} failed: {e}");
                    board.update(|b| b.fail_upload(&e));
                }
            }
            input.set_value("");
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, board, ui, config_id, ev);
    }
}

fn finish_move(board: RwSignal<BoardState>, ui: RwSignal<UiState>, plan: &MovePlan) {
    board.update(|b| b.commit_move(plan));
    board.with_untracked(|b| save_overrides(&b.overrides));
    log!("document {} moved {} -> {}", plan.document_id, plan.from, plan.to);
    ui.update(|u| u.notice = Some(move_notice(plan)));
}

const UPLOAD_NEEDS_CONFIG: &str = "Select a document type before uploading";
const UPLOAD_ACCEPT: &str = ".pdf,.xlsx,.xls,.png,.jpg,.jpeg";

pub(crate) fn upload_notice(count: usize) -> String {
    match count {
        1 => "Uploaded 1 document".to_owned(),
        n => format!("Uploaded {n} documents"),
    }
}

pub(crate) fn move_notice(plan: &MovePlan) -> String {
    format!("Moved to {}", plan.to.config().label)
}

/// Config picker value to filter id; the empty "all" option maps to `None`.
pub(crate) fn parse_config_choice(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Inclusive date range once both ends are set, ordered low to high.
pub(crate) fn date_range(from: &str, to: &str) -> Option<(String, String)> {
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }
    if from <= to {
        Some((from.to_owned(), to.to_owned()))
    } else {
        Some((to.to_owned(), from.to_owned()))
    }
}
