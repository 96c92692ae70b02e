//! Errors surfaced by the strict analysis entry point.

use thiserror::Error;

/// Reasons an analysis can be refused or fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("nothing to analyze: input is empty")]
    EmptyInput,
    #[error("input is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
    #[error("analysis failed: {0}")]
    Failed(String),
}
