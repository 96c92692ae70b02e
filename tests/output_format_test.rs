//! Tests for the JSON report produced from a directory scan.

use std::path::PathBuf;

use codescope::cli::{analyze_files, collect_files};
use codescope::report::{build_json, JsonReport};
use codescope::{Config, Rating};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Scan testdata and return the JSON report round-tripped through serde.
fn run_and_get_json() -> (JsonReport, serde_json::Value) {
    let config = Config::default();
    let files = collect_files(&testdata_path(), &config).expect("should collect files");
    let entries = analyze_files(&files, &config);

    let json = serde_json::to_string_pretty(&build_json(&entries)).expect("should serialize");
    let report: JsonReport = serde_json::from_str(&json).expect("should parse JSON report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("should parse JSON value");
    (report, value)
}

#[test]
fn test_json_report_covers_every_fixture() {
    let (report, _) = run_and_get_json();

    let names: Vec<String> = report
        .inputs
        .iter()
        .map(|e| {
            PathBuf::from(&e.source)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .to_string()
        })
        .collect();

    assert_eq!(
        names,
        vec![
            "duplicates.py",
            "fibonacci.py",
            "hello.go",
            "insecure.js",
            "nested_loops.js"
        ]
    );
    assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_json_report_issue_totals() {
    let (report, _) = run_and_get_json();

    let security: usize = report.inputs.iter().map(|e| e.result.security_issues.len()).sum();
    let performance: usize = report
        .inputs
        .iter()
        .map(|e| e.result.performance_issues.len())
        .sum();

    assert_eq!(report.security_issue_count, security);
    assert_eq!(report.performance_issue_count, performance);
    assert_eq!(report.security_issue_count, 4);
}

#[test]
fn test_json_field_names() {
    let (_, value) = run_and_get_json();
    let first = &value["inputs"][0];

    for field in [
        "language",
        "timeComplexity",
        "spaceComplexity",
        "cyclomaticComplexity",
        "cognitiveComplexity",
        "maintainabilityIndex",
        "linesOfCode",
        "duplicateCodePercentage",
        "explanation",
        "suggestions",
        "securityIssues",
        "performanceIssues",
    ] {
        assert!(
            first["result"].get(field).is_some(),
            "missing field {}",
            field
        );
    }

    for field in ["cyclomatic", "cognitive", "duplication", "maintainability"] {
        assert!(first["ratings"].get(field).is_some(), "missing rating {}", field);
    }
}

#[test]
fn test_duplication_rating_in_report() {
    let (report, _) = run_and_get_json();

    let dup = report
        .inputs
        .iter()
        .find(|e| e.source.ends_with("duplicates.py"))
        .expect("duplicates fixture should be present");

    assert_eq!(dup.result.duplicate_code_percentage, 20);
    assert_eq!(dup.ratings.duplication, Rating::Poor);
}
