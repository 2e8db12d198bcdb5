//! Keyword-rule classification of issues.
//!
//! Two independent rule cascades run over the lower-cased `title body` text:
//! one resolves the [`IssueType`], the other the [`Criticality`]. Each cascade
//! is an ordered table of `(predicate, result)` rules evaluated top to bottom
//! with first-match-wins semantics. The tables deliberately overlap (e.g.
//! "broken" appears in both the bug-type and high-criticality lists); the
//! evaluation order is the contract, so do not reorder entries.

use super::models::{Classification, Criticality, IssueType};

const SECURITY_KEYWORDS: &[&str] = &[
    "security",
    "vulnerability",
    "exploit",
    "ssl",
    "tls",
    "https",
    "certificate",
    "authentication",
    "authorization",
    "xss",
    "sql injection",
    "csrf",
    "encryption",
    "password",
    "token",
    "auth",
    "login",
    "session",
    "cookie",
    "cors",
    "injection",
    "malicious",
    "attack",
    "breach",
    "leak",
    "exposed",
    "unsafe",
    "insecure",
    "privilege",
    "permission",
];

const FEATURE_KEYWORDS: &[&str] = &[
    "feature",
    "add",
    "implement",
    "new functionality",
    "enhancement request",
];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "performance",
    "slow",
    "optimize",
    "memory",
    "cpu",
    "speed",
    "timeout",
    "lag",
    "bottleneck",
];

const DOCUMENTATION_KEYWORDS: &[&str] =
    &["documentation", "readme", "docs", "comment", "guide", "manual"];

const ENHANCEMENT_KEYWORDS: &[&str] =
    &["enhance", "improve", "better", "refactor", "cleanup", "upgrade"];

const BUG_KEYWORDS: &[&str] = &[
    "error",
    "bug",
    "issue",
    "problem",
    "broken",
    "fail",
    "crash",
    "exception",
    "null",
];

/// Type resolution order. Security outranks everything; bug is also the
/// default when nothing matches.
const TYPE_RULES: &[(&[&str], IssueType)] = &[
    (SECURITY_KEYWORDS, IssueType::Security),
    (FEATURE_KEYWORDS, IssueType::Feature),
    (PERFORMANCE_KEYWORDS, IssueType::Performance),
    (DOCUMENTATION_KEYWORDS, IssueType::Documentation),
    (ENHANCEMENT_KEYWORDS, IssueType::Enhancement),
    (BUG_KEYWORDS, IssueType::Bug),
];

const CRITICAL_KEYWORDS: &[&str] = &[
    "critical",
    "urgent",
    "emergency",
    "crash",
    "data loss",
    "production down",
    "ssl",
    "vulnerability",
    "exploit",
];

const HIGH_KEYWORDS: &[&str] = &[
    "important",
    "major",
    "blocking",
    "cannot",
    "unable",
    "broken",
    "not working",
    "fails",
];

const LOW_KEYWORDS: &[&str] = &["minor", "cosmetic", "typo", "suggestion"];

/// One branch of the criticality cascade: matches when the text contains any
/// keyword OR the already-resolved type is in `types`.
struct CriticalityRule {
    keywords: &'static [&'static str],
    types: &'static [IssueType],
    result: Criticality,
}

/// Criticality resolution order; medium is the default when nothing matches.
const CRITICALITY_RULES: &[CriticalityRule] = &[
    CriticalityRule {
        keywords: CRITICAL_KEYWORDS,
        types: &[IssueType::Security],
        result: Criticality::Critical,
    },
    CriticalityRule {
        keywords: HIGH_KEYWORDS,
        types: &[IssueType::Performance],
        result: Criticality::High,
    },
    CriticalityRule {
        keywords: LOW_KEYWORDS,
        types: &[IssueType::Documentation, IssueType::Enhancement],
        result: Criticality::Low,
    },
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Resolve the issue type from already-lower-cased text.
pub fn resolve_type(text: &str) -> IssueType {
    TYPE_RULES
        .iter()
        .find(|(keywords, _)| contains_any(text, keywords))
        .map(|(_, issue_type)| *issue_type)
        .unwrap_or(IssueType::Bug)
}

/// Resolve the criticality from already-lower-cased text and the resolved type.
pub fn resolve_criticality(text: &str, issue_type: IssueType) -> Criticality {
    CRITICALITY_RULES
        .iter()
        .find(|rule| rule.types.contains(&issue_type) || contains_any(text, rule.keywords))
        .map(|rule| rule.result)
        .unwrap_or(Criticality::Medium)
}

/// Classify an issue from its title and body.
///
/// Pure and deterministic: a missing body is the empty string, the combined
/// text is lower-cased once, and both cascades run over the same text.
pub fn classify(title: &str, body: &str) -> Classification {
    let text = format!("{} {}", title, body).to_lowercase();
    let issue_type = resolve_type(&text);
    let criticality = resolve_criticality(&text, issue_type);
    Classification::new(issue_type, criticality)
}
