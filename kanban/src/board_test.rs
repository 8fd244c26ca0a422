use super::*;
use crate::flow::{ContentContext, Flow};
use crate::status::BackendStatus;

// =============================================================
// Helpers
// =============================================================

fn make_doc(id: i64, status: KanbanStatus) -> UnifiedDocument {
    let flow = Flow {
        id,
        config_id: 1,
        config_version: 1,
        schema_id: 1,
        schema_version: 1,
        content_context: ContentContext::default(),
        langsmith_trace_id: None,
        main_status: BackendStatus::Pending,
        created_at: "2025-03-10T08:30:00".to_owned(),
        updated_at: None,
        result: None,
        config: None,
        schema: None,
    };
    let mut doc = UnifiedDocument::from_flow(flow, None);
    doc.status = status;
    doc
}

fn ids(docs: &[UnifiedDocument]) -> Vec<i64> {
    docs.iter().map(|d| d.id).collect()
}

// =============================================================
// group_by_status
// =============================================================

#[test]
fn group_empty_input_has_all_six_keys() {
    let grouped = group_by_status(Vec::<UnifiedDocument>::new());
    assert_eq!(grouped.len(), 6);
    for status in KanbanStatus::ALL {
        assert!(grouped[&status].is_empty(), "{status} should be empty");
    }
}

#[test]
fn group_preserves_total_count() {
    let docs = vec![
        make_doc(1, KanbanStatus::Pending),
        make_doc(2, KanbanStatus::Failed),
        make_doc(3, KanbanStatus::Reviewing),
        make_doc(4, KanbanStatus::Pending),
        make_doc(5, KanbanStatus::Confirmed),
    ];
    let grouped = group_by_status(docs);
    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, 5);
}

#[test]
fn group_preserves_relative_order_within_columns() {
    let docs = vec![
        make_doc(10, KanbanStatus::Completed),
        make_doc(11, KanbanStatus::Pending),
        make_doc(12, KanbanStatus::Completed),
        make_doc(13, KanbanStatus::Pending),
        make_doc(14, KanbanStatus::Completed),
    ];
    let grouped = group_by_status(docs);
    assert_eq!(ids(&grouped[&KanbanStatus::Completed]), vec![10, 12, 14]);
    assert_eq!(ids(&grouped[&KanbanStatus::Pending]), vec![11, 13]);
    assert!(grouped[&KanbanStatus::Processing].is_empty());
}

#[test]
fn group_keeps_duplicates() {
    let docs = vec![make_doc(1, KanbanStatus::Failed), make_doc(1, KanbanStatus::Failed)];
    let grouped = group_by_status(docs);
    assert_eq!(grouped[&KanbanStatus::Failed].len(), 2);
}

// =============================================================
// build_columns
// =============================================================

#[test]
fn columns_follow_display_order_with_counts() {
    let docs = vec![make_doc(1, KanbanStatus::Reviewing), make_doc(2, KanbanStatus::Reviewing)];
    let columns = build_columns(docs);
    let order: Vec<KanbanStatus> = columns.iter().map(|c| c.status).collect();
    assert_eq!(order, KanbanStatus::ALL.to_vec());
    let reviewing = &columns[3];
    assert_eq!(reviewing.count, 2);
    assert_eq!(reviewing.config.label, "Reviewing");
}

// =============================================================
// DocumentFilter
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let filter = DocumentFilter::default();
    assert!(filter.is_empty());
    assert!(filter.matches(&make_doc(1, KanbanStatus::Pending)));
}

#[test]
fn whitespace_search_counts_as_empty() {
    let filter = DocumentFilter {
        search_text: "   ".to_owned(),
        ..DocumentFilter::default()
    };
    assert!(filter.is_empty());
    assert!(filter.matches(&make_doc(1, KanbanStatus::Pending)));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let mut by_title = make_doc(1, KanbanStatus::Pending);
    by_title.title = "ACME-Invoice.pdf".to_owned();
    let mut by_subtitle = make_doc(2, KanbanStatus::Pending);
    by_subtitle.subtitle = Some("Acme receipts".to_owned());
    let mut by_preview = make_doc(3, KanbanStatus::Pending);
    by_preview.preview = Some("billed to acme corp".to_owned());
    let miss = make_doc(4, KanbanStatus::Pending);

    let filter = DocumentFilter {
        search_text: "Acme".to_owned(),
        ..DocumentFilter::default()
    };
    let kept = filter.apply(&[by_title, by_subtitle, by_preview, miss]);
    assert_eq!(ids(&kept), vec![1, 2, 3]);
}

#[test]
fn config_filter_keeps_matching_config() {
    let mut other = make_doc(2, KanbanStatus::Pending);
    other.config_id = Some(7);
    let filter = DocumentFilter {
        config_id: Some(7),
        ..DocumentFilter::default()
    };
    let kept = filter.apply(&[make_doc(1, KanbanStatus::Pending), other]);
    assert_eq!(ids(&kept), vec![2]);
}

#[test]
fn date_range_is_inclusive_on_day() {
    let filter = DocumentFilter {
        date_range: Some(("2025-03-10".to_owned(), "2025-03-10".to_owned())),
        ..DocumentFilter::default()
    };
    assert!(filter.matches(&make_doc(1, KanbanStatus::Pending)));

    let mut earlier = make_doc(2, KanbanStatus::Pending);
    earlier.created_at = "2025-03-09T23:59:59".to_owned();
    assert!(!filter.matches(&earlier));
}

#[test]
fn filter_then_group_keeps_order() {
    let mut docs = vec![
        make_doc(1, KanbanStatus::Completed),
        make_doc(2, KanbanStatus::Completed),
        make_doc(3, KanbanStatus::Completed),
    ];
    docs[1].title = "skip me".to_owned();
    let filter = DocumentFilter {
        search_text: "flow".to_owned(),
        ..DocumentFilter::default()
    };
    let grouped = group_by_status(filter.apply(&docs));
    assert_eq!(ids(&grouped[&KanbanStatus::Completed]), vec![1, 3]);
}

// =============================================================
// BoardStats
// =============================================================

#[test]
fn stats_cover_every_status_and_sum_to_total() {
    let docs = vec![
        make_doc(1, KanbanStatus::Pending),
        make_doc(2, KanbanStatus::Pending),
        make_doc(3, KanbanStatus::Confirmed),
    ];
    let stats = BoardStats::from_documents(&docs);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.counts.len(), 6);
    assert_eq!(stats.count(KanbanStatus::Pending), 2);
    assert_eq!(stats.count(KanbanStatus::Confirmed), 1);
    assert_eq!(stats.count(KanbanStatus::Failed), 0);
    assert_eq!(stats.counts.values().sum::<usize>(), stats.total);
}
