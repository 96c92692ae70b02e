//! Line-level duplicate detection.

use std::collections::HashSet;

/// Trimmed lines shorter than this are ignored.
pub const MIN_LINE_CHARS: usize = 6;

/// Percentage of qualifying lines whose exact text appears more than once.
///
/// A line repeated many times still counts once in the numerator. Returns 0
/// when no line qualifies.
pub fn duplicate_percentage(text: &str) -> u32 {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
        .collect();

    if lines.is_empty() {
        return 0;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicated: HashSet<&str> = HashSet::new();
    for &line in &lines {
        if !seen.insert(line) {
            duplicated.insert(line);
        }
    }

    let ratio = duplicated.len() as f64 / lines.len() as f64;
    (ratio * 100.0).round().min(100.0) as u32
}
