//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::AnalysisResult;
use crate::score::{MetricRatings, Rating};

/// One analyzed input and its outcome.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// File path, or "-" for stdin
    pub source: String,
    pub result: AnalysisResult,
}

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub inputs: Vec<JsonEntry>,
    pub security_issue_count: usize,
    pub performance_issue_count: usize,
}

/// JSON entry for one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEntry {
    pub source: String,
    pub result: AnalysisResult,
    pub ratings: MetricRatings,
}

/// Build the JSON report structure.
pub fn build_json(entries: &[ReportEntry]) -> JsonReport {
    let inputs: Vec<JsonEntry> = entries
        .iter()
        .map(|e| JsonEntry {
            source: e.source.clone(),
            result: e.result.clone(),
            ratings: MetricRatings::from_result(&e.result),
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        security_issue_count: entries.iter().map(|e| e.result.security_issues.len()).sum(),
        performance_issue_count: entries
            .iter()
            .map(|e| e.result.performance_issues.len())
            .sum(),
        inputs,
    }
}

/// Write results in JSON format.
pub fn write_json(entries: &[ReportEntry]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&build_json(entries))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(entries: &[ReportEntry]) {
    // Header
    println!();
    print!("  ");
    print!("{}", "codescope".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    for entry in entries {
        write_entry(entry);
        println!();
    }
}

fn write_entry(entry: &ReportEntry) {
    let r = &entry.result;
    let ratings = MetricRatings::from_result(r);

    print!("  {}", "Source:   ".dimmed());
    println!("{}", entry.source.blue());
    print!("  {}", "Language: ".dimmed());
    println!("{}", r.language);
    println!();

    println!("  {}", "Complexity:".bold());
    println!("    {:<24}{}", "time", r.time_complexity.to_string().cyan());
    println!("    {:<24}{}", "space", r.space_complexity.to_string().cyan());
    println!();

    println!("  {}", "Metrics:".bold());
    write_metric("cyclomatic", r.cyclomatic_complexity.to_string(), ratings.cyclomatic);
    write_metric("cognitive", r.cognitive_complexity.to_string(), ratings.cognitive);
    write_metric(
        "maintainability",
        r.maintainability_index.to_string(),
        ratings.maintainability,
    );
    write_metric(
        "duplication",
        format!("{}%", r.duplicate_code_percentage),
        ratings.duplication,
    );
    println!("    {:<24}{}", "lines of code", r.lines_of_code);
    println!();

    println!("  {}", r.explanation.dimmed());
    println!();

    write_list("Security", &r.security_issues, |s| s.red().to_string());
    write_list("Performance", &r.performance_issues, |s| s.yellow().to_string());
    write_list("Suggestions", &r.suggestions, |s| s.to_string());
}

fn write_metric(name: &str, value: String, rating: Rating) {
    print!("    {:<24}", name);
    print!("{}", colorize(&value, rating));
    println!("  {}", format!("({})", rating).dimmed());
}

fn colorize(value: &str, rating: Rating) -> ColoredString {
    match rating {
        Rating::Good => value.green(),
        Rating::Fair => value.yellow(),
        Rating::Poor => value.red(),
    }
}

fn write_list(title: &str, items: &[String], style: impl Fn(&str) -> String) {
    if items.is_empty() {
        return;
    }

    println!("  {} ({}):", title.bold(), items.len());
    for item in items {
        println!("    - {}", style(item));
    }
    println!();
}
