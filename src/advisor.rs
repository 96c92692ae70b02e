//! Improvement suggestions derived from computed metrics.
//!
//! The advisor never looks at source text. Each rule is a predicate over an
//! already-assembled result plus the configured thresholds.

use serde::{Deserialize, Serialize};

use crate::detect::AnalysisResult;

/// Default advisor thresholds.
pub mod defaults {
    pub const CYCLOMATIC: u32 = 10;
    pub const COGNITIVE: u32 = 15;
    pub const DUPLICATION: u32 = 10;
    pub const MAINTAINABILITY: u32 = 20;
}

/// Limits that trigger suggestions.
///
/// Complexity and duplication fire when strictly above their limit;
/// maintainability fires when strictly below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Thresholds {
    #[serde(default = "default_cyclomatic")]
    pub cyclomatic: u32,
    #[serde(default = "default_cognitive")]
    pub cognitive: u32,
    #[serde(default = "default_duplication")]
    pub duplication: u32,
    #[serde(default = "default_maintainability")]
    pub maintainability: u32,
}

fn default_cyclomatic() -> u32 {
    defaults::CYCLOMATIC
}

fn default_cognitive() -> u32 {
    defaults::COGNITIVE
}

fn default_duplication() -> u32 {
    defaults::DUPLICATION
}

fn default_maintainability() -> u32 {
    defaults::MAINTAINABILITY
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cyclomatic: defaults::CYCLOMATIC,
            cognitive: defaults::COGNITIVE,
            duplication: defaults::DUPLICATION,
            maintainability: defaults::MAINTAINABILITY,
        }
    }
}

/// A suggestion and the condition that triggers it.
struct SuggestionRule {
    applies: fn(&AnalysisResult, &Thresholds) -> bool,
    message: &'static str,
}

/// Rules in emission order.
static SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        applies: |r, t| r.cyclomatic_complexity > t.cyclomatic,
        message: "Consider breaking down complex functions into smaller ones",
    },
    SuggestionRule {
        applies: |r, t| r.cognitive_complexity > t.cognitive,
        message: "Reduce nesting levels and simplify conditional logic",
    },
    SuggestionRule {
        applies: |r, t| r.duplicate_code_percentage > t.duplication,
        message: "Extract duplicate code into reusable functions",
    },
    SuggestionRule {
        applies: |r, _| r.time_complexity.is_polynomial_blowup(),
        message: "Consider optimizing nested loops or using more efficient algorithms",
    },
    SuggestionRule {
        applies: |r, t| r.maintainability_index < t.maintainability,
        message: "Code maintainability is low - consider refactoring",
    },
];

/// Build suggestions for a result using the given thresholds.
pub fn build_suggestions(result: &AnalysisResult, thresholds: &Thresholds) -> Vec<String> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(result, thresholds))
        .map(|rule| rule.message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{BigO, Language};

    fn baseline() -> AnalysisResult {
        AnalysisResult {
            language: Language::Unknown,
            time_complexity: BigO::Constant,
            space_complexity: BigO::Constant,
            cyclomatic_complexity: 1,
            cognitive_complexity: 0,
            maintainability_index: 100,
            lines_of_code: 0,
            duplicate_code_percentage: 0,
            explanation: String::new(),
            suggestions: Vec::new(),
            security_issues: Vec::new(),
            performance_issues: Vec::new(),
        }
    }

    #[test]
    fn test_no_suggestions_for_clean_metrics() {
        assert!(build_suggestions(&baseline(), &Thresholds::default()).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut r = baseline();
        r.cyclomatic_complexity = 10;
        r.cognitive_complexity = 15;
        r.duplicate_code_percentage = 10;
        r.maintainability_index = 20;
        assert!(build_suggestions(&r, &Thresholds::default()).is_empty());
    }

    #[test]
    fn test_all_suggestions_in_order() {
        let mut r = baseline();
        r.cyclomatic_complexity = 11;
        r.cognitive_complexity = 16;
        r.duplicate_code_percentage = 11;
        r.time_complexity = BigO::Cubic;
        r.maintainability_index = 19;

        let suggestions = build_suggestions(&r, &Thresholds::default());
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions[0].contains("breaking down"));
        assert!(suggestions[1].contains("nesting"));
        assert!(suggestions[2].contains("duplicate"));
        assert!(suggestions[3].contains("nested loops"));
        assert!(suggestions[4].contains("maintainability"));
    }

    #[test]
    fn test_quadratic_triggers_optimization_hint() {
        let mut r = baseline();
        r.time_complexity = BigO::Quadratic;
        assert_eq!(build_suggestions(&r, &Thresholds::default()).len(), 1);

        r.time_complexity = BigO::Exponential;
        assert!(build_suggestions(&r, &Thresholds::default()).is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let mut r = baseline();
        r.cyclomatic_complexity = 6;
        let strict = Thresholds {
            cyclomatic: 5,
            ..Thresholds::default()
        };
        assert_eq!(build_suggestions(&r, &strict).len(), 1);
    }
}
