//! Codescope - heuristic code metrics without parsing.
//!
//! Codescope estimates structural and quality metrics for an arbitrary
//! snippet of source code. It never builds a syntax tree: every analyzer is
//! a pure function over the raw text, so results are best-effort guesses,
//! not guarantees.
//!
//! # Architecture
//!
//! - `detect`: the analyzers (language, Big-O, structural metrics,
//!   duplication, issue scanners) and the `Analyzer` that runs them in order
//! - `advisor`: threshold rules turning metrics into suggestions
//! - `score`: good / fair / poor rating bands for display
//! - `config`: YAML configuration
//! - `report`: output formatting (pretty, JSON)
//!
//! # Example
//!
//! ```
//! let result = codescope::analyze("for i in range(10):\n    print(i)\n");
//! assert_eq!(result.language, codescope::Language::Python);
//! assert_eq!(result.time_complexity, codescope::BigO::Linear);
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod report;
pub mod score;

pub use advisor::Thresholds;
pub use config::Config;
pub use detect::{AnalysisResult, Analyzer, BigO, Language};
pub use error::AnalysisError;
pub use score::{MetricRatings, Rating};

/// Analyze a snippet with default settings.
///
/// Always returns a result; empty input yields language `unknown`,
/// `O(1)` time and no findings.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::new().analyze(text)
}
