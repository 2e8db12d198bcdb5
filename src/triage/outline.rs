//! Per-type remediation outlines.
//!
//! Each issue type maps to a fixed five-step template; the issue title is
//! interpolated where the template carries a `{title}` placeholder. Content
//! lives in the template constants, selection in [`outline`].

use super::models::IssueType;

const BUG_OUTLINE: &str = "1. Reproduce the issue described in \"{title}\"\n\
2. Debug the root cause in the affected code\n\
3. Implement a fix with proper error handling\n\
4. Add unit tests to prevent regression\n\
5. Test thoroughly before deployment";

const SECURITY_OUTLINE: &str = "1. URGENT: Assess security impact immediately\n\
2. Implement security patch following best practices\n\
3. Review related code for similar vulnerabilities\n\
4. Update dependencies if applicable\n\
5. Conduct security audit";

const FEATURE_OUTLINE: &str = "1. Analyze requirements from \"{title}\"\n\
2. Design the feature architecture\n\
3. Implement core functionality\n\
4. Add comprehensive tests\n\
5. Update documentation";

const PERFORMANCE_OUTLINE: &str = "1. Profile and identify performance bottlenecks\n\
2. Optimize critical code paths\n\
3. Implement caching where appropriate\n\
4. Monitor performance metrics\n\
5. Load test the improvements";

const DOCUMENTATION_OUTLINE: &str = "1. Review current documentation gaps\n\
2. Write clear, comprehensive documentation\n\
3. Add code examples and usage patterns\n\
4. Update README and API docs\n\
5. Review for accuracy";

const ENHANCEMENT_OUTLINE: &str = "1. Evaluate current implementation\n\
2. Design improved solution\n\
3. Implement enhancements incrementally\n\
4. Maintain backward compatibility\n\
5. Update tests and documentation";

/// Render the remediation outline for an issue.
///
/// Pure and deterministic; the bug template doubles as the fallback for the
/// default classification.
pub fn outline(title: &str, issue_type: IssueType) -> String {
    let template = match issue_type {
        IssueType::Bug => BUG_OUTLINE,
        IssueType::Security => SECURITY_OUTLINE,
        IssueType::Feature => FEATURE_OUTLINE,
        IssueType::Performance => PERFORMANCE_OUTLINE,
        IssueType::Documentation => DOCUMENTATION_OUTLINE,
        IssueType::Enhancement => ENHANCEMENT_OUTLINE,
    };
    template.replace("{title}", title)
}
