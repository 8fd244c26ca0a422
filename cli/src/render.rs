//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use kanban::{BoardStats, FlowConfig, KanbanColumn, KanbanStatus, MovePlan, UnifiedDocument};

const LABEL_WIDTH: usize = 12;

/// One block per column: header with count, then one line per card.
pub fn render_board(columns: &[KanbanColumn]) -> String {
    let mut out = String::new();
    for column in columns {
        let _ = writeln!(out, "{} ({})", column.config.label, column.count);
        if column.documents.is_empty() {
            out.push_str("  (empty)\n");
            continue;
        }
        for doc in &column.documents {
            let _ = writeln!(out, "  {}", card_line(doc));
        }
    }
    out
}

pub fn render_stats(stats: &BoardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Total", stats.total);
    for status in KanbanStatus::ALL {
        let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", status.config().label, stats.count(status));
    }
    out
}

pub fn render_flows(documents: &[UnifiedDocument], total: u64) -> String {
    let mut out = String::new();
    for doc in documents {
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{:<LABEL_WIDTH$}{}",
            doc.original_status.label(),
            doc.status.as_str(),
            card_line(doc)
        );
    }
    let _ = writeln!(out, "{} of {total} flows", documents.len());
    out
}

pub fn render_configs(configs: &[FlowConfig]) -> String {
    let mut out = String::new();
    for config in configs {
        let state = if config.is_active() { "active" } else { "archived" };
        let _ = writeln!(out, "#{:<6}{:<10}{} ({})", config.id, state, config.name, config.slug);
    }
    if configs.is_empty() {
        out.push_str("no configs\n");
    }
    out
}

pub fn render_plan(plan: &MovePlan, dry_run: bool) -> String {
    let outcome = match (dry_run, plan.backend_changed) {
        (true, true) => format!("would set backend status to {}", plan.backend),
        (true, false) => "would record locally".to_owned(),
        (false, true) => format!("backend status set to {}", plan.backend),
        (false, false) => "recorded locally".to_owned(),
    };
    format!("flow {}: {} -> {} ({outcome})", plan.document_id, plan.from, plan.to)
}

fn card_line(doc: &UnifiedDocument) -> String {
    match &doc.subtitle {
        Some(subtitle) => format!("#{:<6}{} [{subtitle}]", doc.id, doc.title),
        None => format!("#{:<6}{}", doc.id, doc.title),
    }
}
