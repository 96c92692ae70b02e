//! Heuristic analyzers over raw source text.

mod complexity;
mod duplication;
mod issues;
mod language;
mod metrics;
mod runner;
mod types;

pub use complexity::{
    count_loop_keywords, estimate_space_complexity, estimate_time_complexity,
    has_recursion_signal,
};
pub use duplication::{duplicate_percentage, MIN_LINE_CHARS};
pub use issues::{
    detect_performance_issues, detect_security_issues, IssueRule, PERFORMANCE_RULES,
    SECURITY_RULES,
};
pub use language::{
    detect_language, score_languages, LanguagePatterns, PatternRule, LANGUAGE_PATTERNS,
    MIN_LANGUAGE_SCORE,
};
pub use metrics::{
    cognitive_complexity, cyclomatic_complexity, lines_of_code, maintainability_from,
    maintainability_index, BRANCH_KEYWORDS, COGNITIVE_CAP, CYCLOMATIC_CAP,
};
pub use runner::{explain, Analyzer};
pub use types::{AnalysisResult, BigO, Language};
