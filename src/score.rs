//! Rating bands for computed metrics.
//!
//! Maps each numeric metric to good / fair / poor. Ratings are derived from
//! a finished result and are never stored in it.

use serde::{Deserialize, Serialize};

use crate::detect::AnalysisResult;

/// Band upper bounds (inclusive) for "lower is better" metrics.
pub mod bands {
    pub const CYCLOMATIC: (u32, u32) = (5, 10);
    pub const COGNITIVE: (u32, u32) = (10, 20);
    pub const DUPLICATION: (u32, u32) = (5, 15);
    /// Lower bounds (inclusive) for maintainability, where higher is better.
    pub const MAINTAINABILITY: (u32, u32) = (70, 40);
}

/// Qualitative rating of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Good => write!(f, "good"),
            Rating::Fair => write!(f, "fair"),
            Rating::Poor => write!(f, "poor"),
        }
    }
}

/// Rate a metric where lower values are better.
fn rate_lower_better(value: u32, (good, fair): (u32, u32)) -> Rating {
    match value {
        v if v <= good => Rating::Good,
        v if v <= fair => Rating::Fair,
        _ => Rating::Poor,
    }
}

pub fn rate_cyclomatic(value: u32) -> Rating {
    rate_lower_better(value, bands::CYCLOMATIC)
}

pub fn rate_cognitive(value: u32) -> Rating {
    rate_lower_better(value, bands::COGNITIVE)
}

pub fn rate_duplication(value: u32) -> Rating {
    rate_lower_better(value, bands::DUPLICATION)
}

pub fn rate_maintainability(value: u32) -> Rating {
    let (good, fair) = bands::MAINTAINABILITY;
    match value {
        v if v >= good => Rating::Good,
        v if v >= fair => Rating::Fair,
        _ => Rating::Poor,
    }
}

/// Ratings for every numeric metric of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRatings {
    pub cyclomatic: Rating,
    pub cognitive: Rating,
    pub duplication: Rating,
    pub maintainability: Rating,
}

impl MetricRatings {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            cyclomatic: rate_cyclomatic(result.cyclomatic_complexity),
            cognitive: rate_cognitive(result.cognitive_complexity),
            duplication: rate_duplication(result.duplicate_code_percentage),
            maintainability: rate_maintainability(result.maintainability_index),
        }
    }

    /// The worst rating across all metrics.
    pub fn overall(&self) -> Rating {
        [
            self.cyclomatic,
            self.cognitive,
            self.duplication,
            self.maintainability,
        ]
        .into_iter()
        .max_by_key(|r| match r {
            Rating::Good => 0,
            Rating::Fair => 1,
            Rating::Poor => 2,
        })
        .unwrap_or(Rating::Good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Analyzer;

    #[test]
    fn test_lower_better_bands() {
        assert_eq!(rate_cyclomatic(1), Rating::Good);
        assert_eq!(rate_cyclomatic(5), Rating::Good);
        assert_eq!(rate_cyclomatic(6), Rating::Fair);
        assert_eq!(rate_cyclomatic(10), Rating::Fair);
        assert_eq!(rate_cyclomatic(11), Rating::Poor);

        assert_eq!(rate_cognitive(10), Rating::Good);
        assert_eq!(rate_cognitive(20), Rating::Fair);
        assert_eq!(rate_cognitive(21), Rating::Poor);

        assert_eq!(rate_duplication(5), Rating::Good);
        assert_eq!(rate_duplication(15), Rating::Fair);
        assert_eq!(rate_duplication(16), Rating::Poor);
    }

    #[test]
    fn test_maintainability_bands() {
        assert_eq!(rate_maintainability(100), Rating::Good);
        assert_eq!(rate_maintainability(70), Rating::Good);
        assert_eq!(rate_maintainability(69), Rating::Fair);
        assert_eq!(rate_maintainability(40), Rating::Fair);
        assert_eq!(rate_maintainability(39), Rating::Poor);
    }

    #[test]
    fn test_overall_is_worst() {
        let result = Analyzer::new().analyze("");
        let mut ratings = MetricRatings::from_result(&result);
        assert_eq!(ratings.overall(), Rating::Good);

        ratings.duplication = Rating::Fair;
        assert_eq!(ratings.overall(), Rating::Fair);
        ratings.cognitive = Rating::Poor;
        assert_eq!(ratings.overall(), Rating::Poor);
    }
}
