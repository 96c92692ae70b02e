//! Core types for analysis results.

use serde::{Deserialize, Serialize};

/// Languages the detector can recognize.
///
/// Declaration order is the scoring order: on equal scores the language
/// declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    C,
    CSharp,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Scala,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Asymptotic growth classes used for time and space estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BigO {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(n³)")]
    Cubic,
    #[serde(rename = "O(2ⁿ)")]
    Exponential,
}

impl BigO {
    pub fn as_str(&self) -> &'static str {
        match self {
            BigO::Constant => "O(1)",
            BigO::Logarithmic => "O(log n)",
            BigO::Linear => "O(n)",
            BigO::Linearithmic => "O(n log n)",
            BigO::Quadratic => "O(n²)",
            BigO::Cubic => "O(n³)",
            BigO::Exponential => "O(2ⁿ)",
        }
    }

    /// Prose used in the analysis explanation.
    pub fn description(&self) -> &'static str {
        match self {
            BigO::Constant => "Constant time - excellent performance",
            BigO::Logarithmic => "Logarithmic time - very efficient for large datasets",
            BigO::Linear => "Linear time - scales proportionally with input size",
            BigO::Linearithmic => "Efficient sorting algorithms complexity",
            BigO::Quadratic => "Quadratic time - consider optimization for large inputs",
            BigO::Cubic => "Cubic time - significant performance concerns",
            BigO::Exponential => "Exponential time - only suitable for small inputs",
        }
    }

    /// Whether this class signals polynomial blowup from nested iteration.
    pub fn is_polynomial_blowup(&self) -> bool {
        matches!(self, BigO::Quadratic | BigO::Cubic)
    }
}

impl std::fmt::Display for BigO {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything computed for one input text.
///
/// Field names serialize in camelCase to match the record consumed by
/// front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub language: Language,
    pub time_complexity: BigO,
    pub space_complexity: BigO,
    pub cyclomatic_complexity: u32,
    pub cognitive_complexity: u32,
    pub maintainability_index: u32,
    pub lines_of_code: usize,
    pub duplicate_code_percentage: u32,
    pub explanation: String,
    pub suggestions: Vec<String>,
    pub security_issues: Vec<String>,
    pub performance_issues: Vec<String>,
}

impl AnalysisResult {
    /// Total number of security and performance findings.
    pub fn issue_count(&self) -> usize {
        self.security_issues.len() + self.performance_issues.len()
    }

    pub fn has_security_issues(&self) -> bool {
        !self.security_issues.is_empty()
    }
}
