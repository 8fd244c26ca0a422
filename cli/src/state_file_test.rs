use super::*;
use kanban::{BackendStatus, ContentContext, Flow, KanbanStatus, UnifiedDocument, plan_move};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("docboard-{}-{name}.json", std::process::id()))
}

fn completed_doc(id: i64) -> UnifiedDocument {
    let flow = Flow {
        id,
        config_id: 1,
        config_version: 1,
        schema_id: 1,
        schema_version: 1,
        content_context: ContentContext::default(),
        langsmith_trace_id: None,
        main_status: BackendStatus::Completed,
        created_at: "2025-06-01T10:00:00".to_owned(),
        updated_at: None,
        result: None,
        config: None,
        schema: None,
    };
    UnifiedDocument::from_flow(flow, None)
}

#[test]
fn missing_file_loads_empty_store() {
    let path = scratch_path("missing");
    let loaded = load(&path).expect("missing file is not an error");
    assert!(loaded.is_empty());
}

#[test]
fn saved_overrides_load_back() {
    let path = scratch_path("roundtrip");
    let mut overrides = StatusOverrides::default();
    let plan = plan_move(&completed_doc(8), KanbanStatus::Confirmed).expect("allowed");
    overrides.record(&plan);

    save(&path, &overrides).expect("save");
    let loaded = load(&path).expect("load");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(loaded.get(8), Some(KanbanStatus::Confirmed));
}

#[test]
fn malformed_file_is_an_error() {
    let path = scratch_path("malformed");
    fs::write(&path, "not json").expect("write");
    let result = load(&path);
    fs::remove_file(&path).expect("cleanup");

    assert!(matches!(result, Err(CliError::InvalidJson(_))));
}
