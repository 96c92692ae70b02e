//! Weighted pattern scoring for language detection.
//!
//! Every language ships an ordered table of `(regex, weight)` rules. A rule
//! adds its weight at most once, no matter how often it matches. Rules are
//! applied to the trimmed, lowercased text, so every pattern here is written
//! in lowercase.
//!
//! Rarely ambiguous markers (`package main`, `#include`, `interface`) carry
//! weight 3-4; markers shared across languages (`var x`, `print(`) carry 1-2.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::Language;

/// Minimum score a language needs before it can be reported.
pub const MIN_LANGUAGE_SCORE: u32 = 3;

/// A single weighted marker.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub weight: u32,
}

const fn rule(pattern: &'static str, weight: u32) -> PatternRule {
    PatternRule { pattern, weight }
}

/// The rule table for one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePatterns {
    pub language: Language,
    pub rules: &'static [PatternRule],
}

/// All pattern tables, in scoring order.
pub static LANGUAGE_PATTERNS: &[LanguagePatterns] = &[
    LanguagePatterns {
        language: Language::Python,
        rules: &[
            rule(r"def\s+\w+\s*\(", 3),
            rule(r"import\s+\w+", 2),
            rule(r"from\s+\w+\s+import", 3),
            rule(r#"if\s+__name__\s*==\s*['"]__main__['"]"#, 4),
            rule(r"(?m):\s*$", 2),
            rule(r"print\s*\(", 2),
            rule(r"elif\s+", 2),
            rule(r"\.append\s*\(", 2),
            rule(r"range\s*\(", 2),
            rule(r"len\s*\(", 1),
        ],
    },
    LanguagePatterns {
        language: Language::JavaScript,
        rules: &[
            rule(r"function\s+\w+\s*\(", 3),
            rule(r"const\s+\w+\s*=", 2),
            rule(r"let\s+\w+", 2),
            rule(r"var\s+\w+", 2),
            rule(r"=>\s*[{(]", 3),
            rule(r"console\.log\s*\(", 3),
            rule(r"document\.", 2),
            rule(r"window\.", 2),
            rule(r"\.foreach\s*\(", 2),
            rule(r"require\s*\(", 2),
        ],
    },
    LanguagePatterns {
        language: Language::TypeScript,
        rules: &[
            rule(r"interface\s+\w+", 4),
            rule(r"type\s+\w+\s*=", 3),
            rule(r":\s*(string|number|boolean|void)", 3),
            rule(r"as\s+\w+", 2),
            rule(r"export\s+(interface|type)", 3),
            rule(r"public\s+\w+\s*\(", 2),
            rule(r"private\s+\w+\s*:", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Java,
        rules: &[
            rule(r"public\s+class\s+\w+", 4),
            rule(r"public\s+static\s+void\s+main", 4),
            rule(r"private\s+\w+", 2),
            rule(r"protected\s+\w+", 2),
            rule(r"extends\s+\w+", 3),
            rule(r"implements\s+\w+", 3),
            rule(r"system\.out\.print", 3),
            rule(r"new\s+\w+\s*\(", 2),
            rule(r"import\s+java\.", 3),
        ],
    },
    LanguagePatterns {
        language: Language::Cpp,
        rules: &[
            rule(r"#include\s*<\w+>", 3),
            rule(r"using\s+namespace\s+std", 4),
            rule(r"int\s+main\s*\(", 3),
            rule(r"std::", 3),
            rule(r"cout\s*<<", 3),
            rule(r"cin\s*>>", 3),
            rule(r"vector\s*<", 2),
            rule(r"string\s+\w+", 2),
            rule(r"#ifndef|#define|#endif", 2),
        ],
    },
    LanguagePatterns {
        language: Language::C,
        rules: &[
            rule(r#"#include\s*[<"]\w+\.h[>"]"#, 3),
            rule(r"int\s+main\s*\(", 3),
            rule(r"printf\s*\(", 3),
            rule(r"scanf\s*\(", 3),
            rule(r"malloc\s*\(", 3),
            rule(r"free\s*\(", 2),
            rule(r"struct\s+\w+", 2),
            rule(r"typedef\s+", 2),
        ],
    },
    LanguagePatterns {
        language: Language::CSharp,
        rules: &[
            rule(r"using\s+system", 3),
            rule(r"namespace\s+\w+", 3),
            rule(r"class\s+\w+", 2),
            rule(r"console\.writeline", 4),
            rule(r"public\s+static\s+void\s+main", 4),
            rule(r"string\[\]\s+args", 3),
            rule(r"\.tostring\s*\(", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Go,
        rules: &[
            rule(r"package\s+main", 4),
            rule(r"func\s+main\s*\(", 3),
            rule(r"import\s+\(", 3),
            rule(r"fmt\.", 3),
            rule(r"func\s+\w+\s*\(", 2),
            rule(r":=", 2),
            rule(r"var\s+\w+\s+\w+", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Rust,
        rules: &[
            rule(r"fn\s+main\s*\(", 4),
            rule(r"let\s+mut\s+", 3),
            rule(r"use\s+std::", 3),
            rule(r"println!\s*\(", 3),
            rule(r"match\s+\w+", 2),
            rule(r"impl\s+", 2),
            rule(r"struct\s+\w+", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Php,
        rules: &[
            rule(r"<\?php", 4),
            rule(r"\$\w+", 3),
            rule(r"function\s+\w+\s*\(", 2),
            rule(r"echo\s+", 2),
            rule(r"->", 2),
            rule(r"array\s*\(", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Ruby,
        rules: &[
            rule(r"def\s+\w+", 3),
            rule(r"end\s*$", 2),
            rule(r"puts\s+", 2),
            rule(r#"require\s+['"]"#, 2),
            rule(r"class\s+\w+", 2),
            rule(r"elsif", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Swift,
        rules: &[
            rule(r"func\s+\w+\s*\(", 3),
            rule(r"var\s+\w+\s*:", 2),
            rule(r"let\s+\w+\s*=", 2),
            rule(r"print\s*\(", 2),
            rule(r"import\s+foundation", 3),
        ],
    },
    LanguagePatterns {
        language: Language::Kotlin,
        rules: &[
            rule(r"fun\s+main\s*\(", 4),
            rule(r"fun\s+\w+\s*\(", 3),
            rule(r"val\s+\w+", 2),
            rule(r"var\s+\w+", 2),
            rule(r"println\s*\(", 2),
        ],
    },
    LanguagePatterns {
        language: Language::Scala,
        rules: &[
            rule(r"object\s+\w+", 3),
            rule(r"def\s+main\s*\(", 4),
            rule(r"val\s+\w+", 2),
            rule(r"var\s+\w+", 2),
            rule(r"println\s*\(", 2),
        ],
    },
];

/// Pre-compiled rule table for one language.
struct CompiledLanguage {
    language: Language,
    rules: Vec<(Regex, u32)>,
}

lazy_static! {
    static ref COMPILED: Vec<CompiledLanguage> = LANGUAGE_PATTERNS
        .iter()
        .map(|lp| CompiledLanguage {
            language: lp.language,
            rules: lp
                .rules
                .iter()
                .map(|r| (Regex::new(r.pattern).unwrap(), r.weight))
                .collect(),
        })
        .collect();
}

/// Normalize text the way every pattern expects it.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Score every language against the text, in scoring order.
pub fn score_languages(text: &str) -> Vec<(Language, u32)> {
    let normalized = normalize(text);

    COMPILED
        .iter()
        .map(|cl| {
            let score: u32 = cl
                .rules
                .iter()
                .filter(|(regex, _)| regex.is_match(&normalized))
                .map(|(_, weight)| *weight)
                .sum();
            (cl.language, score)
        })
        .collect()
}

/// Guess the language of a snippet.
///
/// Picks the strictly highest score; ties keep the language declared first.
/// Returns `Language::Unknown` when no language reaches `MIN_LANGUAGE_SCORE`.
pub fn detect_language(text: &str) -> Language {
    let scores = score_languages(text);

    let mut best = (Language::Unknown, 0u32);
    for (language, score) in scores {
        if score > best.1 && score >= MIN_LANGUAGE_SCORE {
            best = (language, score);
        }
    }

    debug!(language = %best.0, score = best.1, "detected language");
    best.0
}
