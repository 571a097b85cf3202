//! Hygiene: source-level budgets for the tablet crate.
//!
//! A refresh must never take the host down and must never swallow a failure
//! without a log line, so these tests scan `src/` (test files excluded) for
//! patterns that panic, discard errors or bypass `tracing`. Budgets are zero.
//! Raising one means fixing something else first.

use std::fs;
use std::path::Path;

/// A forbidden pattern and how many occurrences are tolerated.
struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { label: "unwrap", pattern: ".unwrap()", max: 0 },
    Budget { label: "expect", pattern: ".expect(", max: 0 },
    Budget { label: "panic", pattern: "panic!(", max: 0 },
    Budget { label: "unreachable", pattern: "unreachable!(", max: 0 },
    Budget { label: "todo", pattern: "todo!(", max: 0 },
    Budget { label: "unimplemented", pattern: "unimplemented!(", max: 0 },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { label: "let-underscore discard", pattern: "let _ =", max: 0 },
    Budget { label: "result to option", pattern: ".ok()", max: 0 },
];

const OUTPUT: &[Budget] = &[
    Budget { label: "println", pattern: "println!(", max: 0 },
    Budget { label: "eprintln", pattern: "eprintln!(", max: 0 },
    Budget { label: "dbg", pattern: "dbg!(", max: 0 },
];

const STRUCTURE: &[Budget] = &[
    Budget { label: "allow(dead_code)", pattern: "#[allow(dead_code)]", max: 0 },
    Budget { label: "unsafe", pattern: "unsafe ", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Every budget that is exceeded, formatted for the assertion message.
fn violations(files: &[SourceFile], budgets: &[Budget]) -> Vec<String> {
    let mut report = Vec::new();
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let detail = hits.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            report.push(format!("{} budget exceeded: found {count}, max {}\n{detail}", budget.label, budget.max));
        }
    }
    report
}

fn assert_within(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let report = violations(&files, budgets);
    assert!(report.is_empty(), "{}", report.join("\n"));
}

#[test]
fn no_panicking_calls() {
    assert_within(PANICS);
}

#[test]
fn no_silent_error_loss() {
    assert_within(SILENT_LOSS);
}

#[test]
fn output_goes_through_tracing() {
    assert_within(OUTPUT);
}

#[test]
fn structure_budgets() {
    assert_within(STRUCTURE);
}
