//! Structural metrics: cyclomatic, cognitive, maintainability.
//!
//! Cyclomatic complexity is calculated as:
//! - Start at 1
//! - Add the substring count of each of: if, else, while, for, case, catch,
//!   &&, ||, ?
//! - Cap at 20
//!
//! Maintainability uses the classic formula with a log-based stand-in for
//! Halstead volume:
//!
//! `MI = 171 - 5.2 ln(V) - 0.23 C - 16.2 ln(L)` where `V = L log2(L)`.

use tracing::debug;

pub const CYCLOMATIC_BASE: u32 = 1;
pub const CYCLOMATIC_CAP: u32 = 20;
pub const COGNITIVE_CAP: u32 = 50;

/// Tokens that open an extra path through the code.
pub const BRANCH_KEYWORDS: &[&str] = &["if", "else", "while", "for", "case", "catch", "&&", "||", "?"];

/// Tokens that count as a nesting-sensitive control structure.
const NESTING_KEYWORDS: &[&str] = &["if", "for", "while"];

/// Smallest line count fed into the logarithms.
const MIN_LOG_LINES: usize = 2;

/// Count non-blank lines.
pub fn lines_of_code(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Keyword-frequency cyclomatic complexity, in `[1, 20]`.
pub fn cyclomatic_complexity(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let branches: usize = BRANCH_KEYWORDS
        .iter()
        .map(|k| lower.matches(k).count())
        .sum();

    let total = (CYCLOMATIC_BASE as usize).saturating_add(branches);
    total.min(CYCLOMATIC_CAP as usize) as u32
}

/// Running state of the cognitive complexity walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CognitiveState {
    total: u32,
    nesting: u32,
}

impl CognitiveState {
    fn step(self, line: &str) -> Self {
        let line = line.trim().to_lowercase();
        let mut next = self;

        if NESTING_KEYWORDS.iter().any(|k| line.contains(k)) {
            next.total = next.total.saturating_add(1 + next.nesting);
            if line.contains('{') {
                next.nesting += 1;
            }
        }
        if line.contains('}') {
            next.nesting = next.nesting.saturating_sub(1);
        }
        if line.contains("&&") || line.contains("||") {
            next.total = next.total.saturating_add(1);
        }

        next
    }
}

/// Nesting-aware cognitive complexity, in `[0, 50]`.
///
/// Each line holding `if`/`for`/`while` costs one plus the current nesting
/// level; only such lines open a level when they carry `{`, while any `}`
/// closes one. Boolean operators add one per line.
pub fn cognitive_complexity(text: &str) -> u32 {
    let state = text
        .split('\n')
        .fold(CognitiveState::default(), CognitiveState::step);

    state.total.min(COGNITIVE_CAP)
}

/// Maintainability index from a line count and cyclomatic complexity.
///
/// Line counts below 2 are raised to 2 so the logarithms stay defined.
/// The result is rounded and floored at 0. Small snippets score above 100.
pub fn maintainability_from(lines: usize, cyclomatic: u32) -> u32 {
    let l = lines.max(MIN_LOG_LINES) as f64;
    let volume = l.log2() * l;

    let raw = 171.0 - 5.2 * volume.ln() - 0.23 * f64::from(cyclomatic) - 16.2 * l.ln();
    if !raw.is_finite() {
        return 0;
    }

    raw.round().max(0.0) as u32
}

/// Maintainability index of a snippet.
pub fn maintainability_index(text: &str) -> u32 {
    let lines = lines_of_code(text);
    let cyclomatic = cyclomatic_complexity(text);
    let mi = maintainability_from(lines, cyclomatic);

    debug!(lines, cyclomatic, maintainability = mi, "computed maintainability");
    mi
}
