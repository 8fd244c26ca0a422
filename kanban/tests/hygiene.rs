//! Source hygiene checks for the kanban core.
//!
//! Scans `src/` (excluding `*_test.rs`) for panicking calls and silently
//! discarded results. The core is shared by the browser client and the CLI,
//! so every budget is zero and may only shrink.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
];

const STYLE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file.content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| (file.path.display().to_string(), count))
            })
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > budget.max {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{}`: found {found}, max {}\n{detail}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn no_panicking_calls() {
    check(PANICS);
}

#[test]
fn no_silently_discarded_results() {
    check(DISCARDS);
}

#[test]
fn no_dead_code_allowances() {
    check(STYLE);
}
