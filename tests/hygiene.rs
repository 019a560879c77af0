//! Hygiene — source-level rules for production code.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that either crash the
//! page or throw errors away unseen. Every budget is zero: a failure in the
//! browser must be logged, never swallowed or turned into a panic.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics on None/Err" },
    Rule { pattern: ".expect(", budget: 0, why: "panics on None/Err" },
    Rule { pattern: "panic!(", budget: 0, why: "aborts the wasm instance" },
    Rule { pattern: "unreachable!(", budget: 0, why: "aborts the wasm instance" },
    Rule { pattern: "todo!(", budget: 0, why: "unfinished code path" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "unfinished code path" },
    Rule { pattern: "let _ =", budget: 0, why: "discards a result without logging" },
    Rule { pattern: ".ok()", budget: 0, why: "discards an error without logging" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "dead code should be deleted" },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn sources_were_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("applier.rs")));
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > rule.budget {
            let listing: Vec<String> = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect();
            failures.push(format!(
                "`{}` ({}) found {total}, budget {}\n{}",
                rule.pattern,
                rule.why,
                rule.budget,
                listing.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
