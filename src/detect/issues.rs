//! Textual security and performance scanners.
//!
//! Checks are plain substring tests on the lowercased text. They do not know
//! about comments or string literals, so a flagged construct may not be real
//! code.

use tracing::debug;

use super::Language;

/// One scanner rule: an identifier, the message it emits, and its check.
pub struct IssueRule {
    pub id: &'static str,
    pub message: &'static str,
    check: fn(&str, Language) -> bool,
}

impl IssueRule {
    /// Whether this rule fires on already-lowercased text.
    pub fn applies(&self, lower: &str, language: Language) -> bool {
        (self.check)(lower, language)
    }
}

/// Security rules, in emission order.
pub static SECURITY_RULES: &[IssueRule] = &[
    IssueRule {
        id: "code_injection",
        message: "Avoid using eval() or exec() - potential code injection risk",
        check: |t, _| t.contains("eval(") || t.contains("exec("),
    },
    IssueRule {
        id: "hardcoded_password",
        message: "Possible hardcoded password detected",
        check: |t, _| t.contains("password") && t.contains('='),
    },
    IssueRule {
        id: "sql_injection",
        message: "Potential SQL injection vulnerability",
        check: |t, _| t.contains("sql") && (t.contains('+') || t.contains("concat")),
    },
    IssueRule {
        id: "xss",
        message: "Using innerHTML can lead to XSS vulnerabilities",
        check: |t, lang| lang == Language::JavaScript && t.contains("innerhtml"),
    },
];

/// Performance rules, in emission order.
pub static PERFORMANCE_RULES: &[IssueRule] = &[
    IssueRule {
        id: "uncached_length",
        message: "Cache array length in loops for better performance",
        check: |t, _| t.contains("for") && t.contains(".length"),
    },
    IssueRule {
        id: "legacy_dom_lookup",
        message: "Consider using querySelector for better performance",
        check: |t, lang| lang == Language::JavaScript && t.contains("getelementsby"),
    },
    IssueRule {
        id: "nested_loop",
        message: "Nested loops detected - consider algorithm optimization",
        check: |t, _| t.contains("nested") && t.contains("loop"),
    },
];

fn scan(rules: &[IssueRule], text: &str, language: Language) -> Vec<String> {
    let lower = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.applies(&lower, language))
        .inspect(|rule| debug!(rule = rule.id, "issue rule fired"))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Heuristic security findings.
pub fn detect_security_issues(text: &str, language: Language) -> Vec<String> {
    scan(SECURITY_RULES, text, language)
}

/// Heuristic performance findings.
pub fn detect_performance_issues(text: &str, language: Language) -> Vec<String> {
    scan(PERFORMANCE_RULES, text, language)
}
