//! Big-O estimation from surface tokens.
//!
//! This is a token-presence heuristic, not a loop-nesting analysis. Raw
//! `for`/`while` occurrences stand in for nesting depth, so sequential loops
//! are classified the same as nested ones.
//!
//! Time rules, first match wins:
//! 1. recursion signal + "fibonacci" -> O(2ⁿ)
//! 2. recursion signal + "factorial" -> O(n)
//! 3. three or more loop keywords -> O(n³)
//! 4. two loop keywords -> O(n²)
//! 5. "sort" (covers mergesort/quicksort) -> O(n log n)
//! 6. "binarysearch" / "binary_search" -> O(log n)
//! 7. one loop keyword -> O(n)
//! 8. otherwise O(1)

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::BigO;

lazy_static! {
    /// Any identifier immediately followed by a call paren.
    static ref CALL_PATTERN: Regex = Regex::new(r"(\w+)\s*\(").unwrap();

    /// `return name(` - matches plain calls too, which is accepted noise.
    static ref RETURN_CALL_PATTERN: Regex = Regex::new(r"return\s+\w+\s*\(").unwrap();
}

const LOOP_KEYWORDS: &[&str] = &["for", "while"];
const SORT_MARKERS: &[&str] = &["sort", "mergesort", "quicksort"];
const BINARY_SEARCH_MARKERS: &[&str] = &["binarysearch", "binary_search"];

const RECURSION_MARKERS: &[&str] = &["recursion", "recursive"];
const SEQUENCE_MARKERS: &[&str] = &["array", "list", "vector"];
const GRID_MARKERS: &[&str] = &["matrix", "2d"];
const TABLE_MARKERS: &[&str] = &["map", "dict", "hash"];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Count raw loop keyword occurrences (summed, not distinct).
pub fn count_loop_keywords(lower: &str) -> usize {
    LOOP_KEYWORDS.iter().map(|k| lower.matches(k).count()).sum()
}

/// Whether two calls on one line share a trailing name segment.
///
/// `getvalue(n) + value(n)` counts: the second name is a suffix of the
/// first. Any shared suffix includes the last character, so comparing last
/// characters is enough and keeps the scan to one pass over the line.
fn repeats_call_suffix(line: &str) -> bool {
    let mut endings = HashSet::new();
    CALL_PATTERN
        .captures_iter(line)
        .filter_map(|cap| cap[1].chars().last())
        .any(|last| !endings.insert(last))
}

/// Rough recursion signal.
///
/// True when a line has two calls whose names end alike, or when any
/// `return name(` appears. Ordinary calls trigger it too; the time rules
/// above are tuned around that imprecision.
pub fn has_recursion_signal(lower: &str) -> bool {
    RETURN_CALL_PATTERN.is_match(lower) || lower.lines().any(repeats_call_suffix)
}

/// Estimate the time complexity class of a snippet.
pub fn estimate_time_complexity(text: &str) -> BigO {
    let lower = text.to_lowercase();
    let loops = count_loop_keywords(&lower);
    let recursive = has_recursion_signal(&lower);

    let class = if recursive && lower.contains("fibonacci") {
        BigO::Exponential
    } else if recursive && lower.contains("factorial") {
        BigO::Linear
    } else if loops >= 3 {
        BigO::Cubic
    } else if loops >= 2 {
        BigO::Quadratic
    } else if contains_any(&lower, SORT_MARKERS) {
        BigO::Linearithmic
    } else if contains_any(&lower, BINARY_SEARCH_MARKERS) {
        BigO::Logarithmic
    } else if loops >= 1 {
        BigO::Linear
    } else {
        BigO::Constant
    };

    debug!(loops, recursive, class = %class, "estimated time complexity");
    class
}

/// Estimate the space complexity class of a snippet.
pub fn estimate_space_complexity(text: &str) -> BigO {
    let lower = text.to_lowercase();

    if contains_any(&lower, RECURSION_MARKERS) {
        return BigO::Linear;
    }
    if contains_any(&lower, SEQUENCE_MARKERS) {
        if contains_any(&lower, GRID_MARKERS) {
            return BigO::Quadratic;
        }
        return BigO::Linear;
    }
    if contains_any(&lower, TABLE_MARKERS) {
        return BigO::Linear;
    }

    BigO::Constant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_is_exponential() {
        let code = r#"
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)
"#;
        assert_eq!(estimate_time_complexity(code), BigO::Exponential);
    }

    #[test]
    fn test_factorial_is_linear() {
        let code = "int factorial(int n) { return n <= 1 ? 1 : n * factorial(n - 1); }";
        assert_eq!(estimate_time_complexity(code), BigO::Linear);
    }

    #[test]
    fn test_fibonacci_without_recursion_falls_through() {
        // no call shape at all, so the name alone decides nothing
        assert_eq!(estimate_time_complexity("fibonacci = 1"), BigO::Constant);
    }

    #[test]
    fn test_two_loops_quadratic() {
        let code = r#"
for i in items:
    while j < i:
        j += 1
"#;
        assert_eq!(estimate_time_complexity(code), BigO::Quadratic);
    }

    #[test]
    fn test_three_loops_cubic() {
        let code = "for a:\n for b:\n  for c:\n   pass";
        assert_eq!(estimate_time_complexity(code), BigO::Cubic);
    }

    #[test]
    fn test_sequential_loops_still_counted() {
        // known limitation: sequential loops look nested
        let code = "for x in a: pass\nfor y in b: pass";
        assert_eq!(estimate_time_complexity(code), BigO::Quadratic);
    }

    #[test]
    fn test_sort_linearithmic() {
        assert_eq!(estimate_time_complexity("items.sort()"), BigO::Linearithmic);
    }

    #[test]
    fn test_loops_beat_sort() {
        let code = "for a in x:\n  for b in y:\n    x.sort()";
        assert_eq!(estimate_time_complexity(code), BigO::Quadratic);
    }

    #[test]
    fn test_binary_search_logarithmic() {
        assert_eq!(
            estimate_time_complexity("idx = binary_search(haystack, needle)"),
            BigO::Logarithmic
        );
    }

    #[test]
    fn test_single_loop_linear() {
        assert_eq!(estimate_time_complexity("while x: x -= 1"), BigO::Linear);
    }

    #[test]
    fn test_constant_fallback() {
        assert_eq!(estimate_time_complexity(""), BigO::Constant);
        assert_eq!(estimate_time_complexity("x = 1 + 2"), BigO::Constant);
    }

    #[test]
    fn test_recursion_signal_same_line_call() {
        assert!(has_recursion_signal("walk(node.left) + walk(node.right)"));
        assert!(has_recursion_signal("return helper(x)"));
        assert!(!has_recursion_signal("a(1)\na(2)"));
        assert!(!has_recursion_signal("x = y + z"));
        assert!(!has_recursion_signal("print(len(x))"));
    }

    #[test]
    fn test_recursion_signal_shared_suffix() {
        assert!(has_recursion_signal("x = getvalue(n) + value(n - 1)"));
        assert!(has_recursion_signal("a = sum(x) + num(y)"));
        assert!(!has_recursion_signal("a = sum(x) + max(y)"));
    }

    #[test]
    fn test_recursion_signal_long_line() {
        let calls: String = (0..100_000).map(|i| format!("f{}(x) + ", i)).collect();
        assert!(has_recursion_signal(&calls));

        let noise = format!("f(x){}", " + x".repeat(250_000));
        assert!(!has_recursion_signal(&noise));
    }

    #[test]
    fn test_count_loop_keywords_is_raw() {
        // "format" contains "for"
        assert_eq!(count_loop_keywords("format while"), 2);
    }

    #[test]
    fn test_space_complexity_rules() {
        assert_eq!(estimate_space_complexity("recursive walk"), BigO::Linear);
        assert_eq!(estimate_space_complexity("let matrix = array"), BigO::Quadratic);
        assert_eq!(estimate_space_complexity("a 2D list"), BigO::Quadratic);
        assert_eq!(estimate_space_complexity("vector<int> v"), BigO::Linear);
        assert_eq!(estimate_space_complexity("counts = dict()"), BigO::Linear);
        assert_eq!(estimate_space_complexity("x = 1"), BigO::Constant);
    }
}
