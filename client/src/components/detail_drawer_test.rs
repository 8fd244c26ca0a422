use super::*;
use kanban::{BackendStatus, ContentContext, Flow};

fn make_doc() -> UnifiedDocument {
    let flow = Flow {
        id: 21,
        config_id: 2,
        config_version: 1,
        schema_id: 1,
        schema_version: 1,
        content_context: ContentContext {
            file_name: Some("receipt.png".to_owned()),
            file_type: Some("image".to_owned()),
            pages: Some(1),
            ..ContentContext::default()
        },
        langsmith_trace_id: Some("a1b2c3d4e5f6".to_owned()),
        main_status: BackendStatus::Completed,
        created_at: "2025-05-02T14:30:00.000Z".to_owned(),
        updated_at: None,
        result: None,
        config: None,
        schema: None,
    };
    UnifiedDocument::from_flow(flow, None)
}

fn value_of<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
    rows.iter().find(|(l, _)| *l == label).map_or("<missing>", |(_, v)| v.as_str())
}

#[test]
fn info_rows_fill_missing_values_with_dash() {
    let rows = info_rows(&make_doc());
    assert_eq!(value_of(&rows, "Document ID"), "21");
    assert_eq!(value_of(&rows, "File name"), "receipt.png");
    assert_eq!(value_of(&rows, "Document type"), "-");
    assert_eq!(value_of(&rows, "Backend status"), "completed");
    assert_eq!(value_of(&rows, "Pages"), "1");
    assert_eq!(value_of(&rows, "Text blocks"), "-");
    assert_eq!(value_of(&rows, "Result version"), "v1");
    assert_eq!(value_of(&rows, "Created"), "2025-05-02 14:30:00");
    assert_eq!(value_of(&rows, "Updated"), "-");
}

#[test]
fn info_rows_shorten_trace_id() {
    let rows = info_rows(&make_doc());
    assert_eq!(value_of(&rows, "Trace ID"), "a1b2c3d4...");

    let mut doc = make_doc();
    doc.trace_id = None;
    assert_eq!(value_of(&info_rows(&doc), "Trace ID"), "<missing>");
}

#[test]
fn flow_href_points_at_backend_flow_resource() {
    let config = ClientConfig::default();
    assert_eq!(flow_href(&config.api_base, 21), "/api/flows/21");
}
