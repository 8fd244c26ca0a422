use super::*;
use kanban::{BackendStatus, ContentContext, Flow, ListResponse};

// =============================================================
// Helpers
// =============================================================

fn make_flow(id: i64, status: BackendStatus) -> Flow {
    Flow {
        id,
        config_id: 1,
        config_version: 1,
        schema_id: 1,
        schema_version: 1,
        content_context: ContentContext { file_name: Some(format!("doc-{id}.pdf")), ..ContentContext::default() },
        langsmith_trace_id: None,
        main_status: status,
        created_at: "2025-04-01T09:00:00".to_owned(),
        updated_at: None,
        result: None,
        config: None,
        schema: None,
    }
}

fn listing(flows: Vec<Flow>) -> FlowListResponse {
    let total = flows.len() as u64;
    ListResponse { items: flows, total }
}

fn loaded(flows: Vec<Flow>) -> BoardState {
    let mut state = BoardState::default();
    state.apply_fetch(listing(flows));
    state
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = BoardState::default();
    assert!(state.documents.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.in_flight.is_empty());
}

#[test]
fn apply_fetch_builds_cards_and_clears_loading() {
    let mut state = BoardState::default();
    state.start_loading();
    assert!(state.loading);

    state.apply_fetch(listing(vec![make_flow(1, BackendStatus::Pending), make_flow(2, BackendStatus::InProgress)]));
    assert!(!state.loading);
    assert_eq!(state.total, 2);
    assert_eq!(state.documents[0].title, "doc-1.pdf");
    assert_eq!(state.documents[1].status, KanbanStatus::Processing);
}

#[test]
fn apply_fetch_reapplies_review_overrides() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Completed)]);
    let plan = state.plan_drop(1, KanbanStatus::Reviewing).expect("allowed");
    state.begin_update(&plan);
    state.commit_move(&plan);

    let applied = state.apply_fetch(listing(vec![make_flow(1, BackendStatus::Completed)]));
    assert_eq!(applied, 1);
    assert_eq!(state.documents[0].status, KanbanStatus::Reviewing);
}

#[test]
fn apply_fetch_clears_selection_of_missing_document() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Pending)]);
    state.selected = Some(1);
    assert!(state.selected_document().is_some());

    state.apply_fetch(listing(vec![make_flow(2, BackendStatus::Pending)]));
    assert!(state.selected.is_none());
}

#[test]
fn fail_fetch_records_error() {
    let mut state = BoardState::default();
    state.start_loading();
    state.fail_fetch("flows request failed: 500");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("failed to load documents: flows request failed: 500"));
}

// =============================================================
// Drag and drop
// =============================================================

#[test]
fn drop_targets_follow_card_status() {
    let state = loaded(vec![make_flow(1, BackendStatus::Completed), make_flow(2, BackendStatus::Pending)]);
    assert_eq!(state.drop_targets(1), vec![KanbanStatus::Reviewing, KanbanStatus::Confirmed]);
    assert!(state.drop_targets(2).is_empty());
    assert!(state.drop_targets(9).is_empty());
}

#[test]
fn review_move_updates_card_and_override() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Completed)]);
    let plan = state.plan_drop(1, KanbanStatus::Confirmed).expect("allowed");
    assert!(!plan.backend_changed);

    state.begin_update(&plan);
    state.commit_move(&plan);
    assert_eq!(state.documents[0].status, KanbanStatus::Confirmed);
    assert_eq!(state.documents[0].original_status, BackendStatus::Completed);
    assert_eq!(state.overrides.get(1), Some(KanbanStatus::Confirmed));
    assert!(state.in_flight.is_empty());
}

#[test]
fn rejected_drop_leaves_card_in_place() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Pending)]);
    let err = state.plan_drop(1, KanbanStatus::Completed).expect_err("not allowed");
    state.reject_move(&err);
    assert_eq!(state.documents[0].status, KanbanStatus::Pending);
    assert_eq!(state.error.as_deref(), Some("cannot move a document from pending to completed"));
}

#[test]
fn drop_of_unknown_document_is_rejected() {
    let state = loaded(vec![make_flow(1, BackendStatus::Pending)]);
    assert_eq!(state.plan_drop(9, KanbanStatus::Pending), Err(MoveError::UnknownDocument(9)));
}

#[test]
fn in_flight_document_cannot_be_moved_again() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Failed)]);
    let plan = state.plan_drop(1, KanbanStatus::Pending).expect("allowed");
    assert!(plan.backend_changed);
    state.begin_update(&plan);

    assert_eq!(state.plan_drop(1, KanbanStatus::Pending), Err(MoveError::InFlight(1)));
    assert!(state.is_in_flight(1));
    assert!(state.drop_targets(1).is_empty());
}

#[test]
fn failed_update_releases_guard_without_moving() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Failed)]);
    let plan = state.plan_drop(1, KanbanStatus::Pending).expect("allowed");
    state.begin_update(&plan);
    state.fail_move(&plan, "status update request failed: 409");

    assert!(state.in_flight.is_empty());
    assert_eq!(state.documents[0].status, KanbanStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("status update failed: status update request failed: 409"));
    assert!(state.plan_drop(1, KanbanStatus::Pending).is_ok());
}

#[test]
fn retry_commit_moves_card_to_pending() {
    let mut state = loaded(vec![make_flow(1, BackendStatus::Failed)]);
    let plan = state.plan_drop(1, KanbanStatus::Pending).expect("allowed");
    state.begin_update(&plan);
    state.commit_move(&plan);

    assert_eq!(state.documents[0].status, KanbanStatus::Pending);
    assert_eq!(state.documents[0].original_status, BackendStatus::Pending);
    assert!(state.overrides.is_empty());
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn filter_drives_columns_and_stats() {
    let mut state = loaded(vec![
        make_flow(1, BackendStatus::Pending),
        make_flow(2, BackendStatus::Failed),
        make_flow(3, BackendStatus::Failed),
    ]);
    assert_eq!(state.stats().total, 3);

    state.filter.search_text = "doc-3".to_owned();
    let stats = state.stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.count(KanbanStatus::Failed), 1);

    let columns = state.columns();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns[5].count, 1);
    assert_eq!(columns[0].count, 0);
}

#[test]
fn column_documents_match_grouped_columns() {
    let mut state = loaded(vec![
        make_flow(1, BackendStatus::Failed),
        make_flow(2, BackendStatus::Pending),
        make_flow(3, BackendStatus::Failed),
    ]);
    let ids: Vec<i64> = state.column_documents(KanbanStatus::Failed).iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3]);

    state.filter.search_text = "doc-3".to_owned();
    let ids: Vec<i64> = state.column_documents(KanbanStatus::Failed).iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(state.columns()[5].documents, state.column_documents(KanbanStatus::Failed));
}

// =============================================================
// Upload
// =============================================================

#[test]
fn upload_needs_a_selected_config() {
    let mut state = BoardState::default();
    assert_eq!(state.upload_target(), None);
    state.filter.config_id = Some(4);
    assert_eq!(state.upload_target(), Some(4));
}

#[test]
fn upload_lifecycle_tracks_progress_and_errors() {
    let mut state = BoardState { error: Some("old".to_owned()), ..BoardState::default() };
    state.start_upload();
    assert!(state.uploading);
    assert!(state.error.is_none());

    state.fail_upload("upload request failed: 413");
    assert!(!state.uploading);
    assert_eq!(state.error.as_deref(), Some("upload failed: upload request failed: 413"));

    state.start_upload();
    state.finish_upload();
    assert!(!state.uploading);
    assert!(state.error.is_none());
}
