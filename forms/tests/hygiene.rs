//! Hygiene: enforces coding standards at test time
//!
//! Scans the production sources under `forms/src/` for patterns that either
//! crash the UI thread, silently swallow errors, or bypass the `log` facade.
//! Each pattern has a budget. Budgets only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on the UI thread" },
    // The compiled-in email regex.
    // The one allowance is the static email regex in schema.rs, built from a
    // literal and forced by `email_pattern_compiles` in schema_test.rs.
    Budget { pattern: ".expect(", max: 1, why: "panics on the UI thread" },
    Budget { pattern: "panic!(", max: 0, why: "panics on the UI thread" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics on the UI thread" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "let _ =", max: 0, why: "discards a value without inspecting it" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error without logging it" },
    Budget { pattern: "println!(", max: 0, why: "bypasses the log facade" },
    Budget { pattern: "eprintln!(", max: 0, why: "bypasses the log facade" },
    Budget { pattern: "dbg!(", max: 0, why: "debug leftover" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

/// `(path, contents)` of every non-test `.rs` file below `dir`.
fn production_sources(dir: &Path) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(production_sources(&path));
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
    out
}

#[test]
fn sources_are_found() {
    let files = production_sources(Path::new("src"));
    assert!(
        files.iter().any(|(path, _)| path.ends_with("controller.rs")),
        "hygiene scan must run from the forms crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources(Path::new("src"));
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (path.clone(), count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, count)| count).sum();
        if total > budget.max {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "{} budget exceeded ({}): found {total}, max {}\n{detail}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
