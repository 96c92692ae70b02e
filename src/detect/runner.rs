//! Analysis runner that orchestrates all analyzers.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::advisor::{self, Thresholds};
use crate::config::{Config, DEFAULT_MAX_INPUT_BYTES};
use crate::error::AnalysisError;

use super::{
    cognitive_complexity, cyclomatic_complexity, detect_language, detect_performance_issues,
    detect_security_issues, duplicate_percentage, estimate_space_complexity,
    estimate_time_complexity, lines_of_code, maintainability_from, AnalysisResult, BigO,
    Language,
};

/// Runs every analyzer against one text and assembles the result.
#[derive(Debug, Clone)]
pub struct Analyzer {
    thresholds: Thresholds,
    max_input_bytes: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with default thresholds and size limit.
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Create an analyzer from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .thresholds(config.thresholds)
            .max_input_bytes(config.max_input_bytes())
    }

    /// Set the advisor thresholds.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the size limit enforced by `try_analyze`.
    pub fn max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    /// Analyze a snippet. Never fails; empty text yields the degenerate result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let language = detect_language(text);
        let time_complexity = estimate_time_complexity(text);
        let space_complexity = estimate_space_complexity(text);
        let cyclomatic = cyclomatic_complexity(text);
        let cognitive = cognitive_complexity(text);
        let lines = lines_of_code(text);
        let maintainability = maintainability_from(lines, cyclomatic);
        let duplication = duplicate_percentage(text);

        let mut result = AnalysisResult {
            language,
            time_complexity,
            space_complexity,
            cyclomatic_complexity: cyclomatic,
            cognitive_complexity: cognitive,
            maintainability_index: maintainability,
            lines_of_code: lines,
            duplicate_code_percentage: duplication,
            explanation: explain(time_complexity, space_complexity, language),
            suggestions: Vec::new(),
            security_issues: detect_security_issues(text, language),
            performance_issues: detect_performance_issues(text, language),
        };

        // Suggestions only read fields computed above.
        result.suggestions = advisor::build_suggestions(&result, &self.thresholds);

        debug!(
            language = %result.language,
            lines = result.lines_of_code,
            issues = result.issue_count(),
            "analysis complete"
        );
        result
    }

    /// Analyze with input validation.
    ///
    /// Rejects empty and oversized input. A panic inside any analyzer is
    /// reported as `AnalysisError::Failed`; no partial result escapes.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if text.len() > self.max_input_bytes {
            return Err(AnalysisError::InputTooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            });
        }

        panic::catch_unwind(AssertUnwindSafe(|| self.analyze(text)))
            .map_err(|payload| AnalysisError::Failed(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}

/// One-sentence summary of the complexity estimate.
pub fn explain(time: BigO, space: BigO, language: Language) -> String {
    format!(
        "Time complexity is {}. Space complexity is {}. Language detected: {}.",
        time.description(),
        space,
        language
    )
}
