//! Concurrent batch triage.
//!
//! One task per issue, no shared mutable state between tasks; each task runs
//! the pure classify + outline pipeline. Results are re-assembled in input
//! order and then ranked. The batch is all-or-nothing: a single failed task
//! aborts the whole request with a generic error and no partial results.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::classifier;
use super::models::{AnalyzedIssue, Issue, IssueAnalysis};
use super::outline;
use super::scaffold;
use crate::errors::TriageError;

/// Analyze a single issue: classification plus the per-type outline.
///
/// Pure and infallible; the plan is left empty here and filled in by the
/// solution endpoint on demand.
pub fn analyze(issue: Issue) -> AnalyzedIssue {
    let classification = classifier::classify(&issue.title, issue.body_text());
    let solution = outline::outline(&issue.title, classification.issue_type);
    AnalyzedIssue {
        issue,
        analysis: IssueAnalysis {
            classification,
            solution,
        },
        plan: None,
    }
}

/// Analyze a single issue and attach its synthesized solution plan.
pub fn analyze_with_plan(issue: Issue) -> AnalyzedIssue {
    let plan = scaffold::synthesize(&issue);
    let mut analyzed = analyze(issue);
    analyzed.plan = Some(plan);
    analyzed
}

/// Stable descending-priority sort; equal priorities keep input order.
pub fn rank(mut issues: Vec<AnalyzedIssue>) -> Vec<AnalyzedIssue> {
    issues.sort_by(|a, b| b.priority().cmp(&a.priority()));
    issues
}

/// Triage a batch of issues concurrently.
///
/// Fans out one tokio task per issue, joins them back into input order, then
/// ranks by descending priority. Any task failure aborts the batch; the
/// failing issue id is logged but never surfaced to the caller.
pub async fn triage(
    issues: Vec<Issue>,
    repo_context: &str,
) -> Result<Vec<AnalyzedIssue>, TriageError> {
    debug!(
        count = issues.len(),
        repo_context, "starting batch analysis"
    );

    let mut set = JoinSet::new();
    let count = issues.len();
    for (idx, issue) in issues.into_iter().enumerate() {
        set.spawn(async move { (idx, issue.id, analyze(issue)) });
    }

    let mut slots: Vec<Option<AnalyzedIssue>> = (0..count).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, _, analyzed)) => slots[idx] = Some(analyzed),
            Err(err) => {
                warn!(error = %err, "analysis task failed, aborting batch");
                return Err(TriageError::BatchFailure);
            }
        }
    }

    let mut ordered = Vec::with_capacity(count);
    for slot in slots {
        match slot {
            Some(analyzed) => ordered.push(analyzed),
            None => return Err(TriageError::BatchFailure),
        }
    }

    Ok(rank(ordered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::models::{
        Classification, Criticality, IssueState, IssueType, SolutionPlan,
    };

    fn issue(id: i64, title: &str) -> Issue {
        Issue {
            id,
            title: title.to_string(),
            body: None,
            state: IssueState::Open,
            author: "octocat".to_string(),
        }
    }

    fn analyzed(id: i64, criticality: Criticality) -> AnalyzedIssue {
        AnalyzedIssue {
            issue: issue(id, "t"),
            analysis: IssueAnalysis {
                classification: Classification::new(IssueType::Bug, criticality),
                solution: String::new(),
            },
            plan: None,
        }
    }

    #[test]
    fn test_analyze_combines_classification_and_outline() {
        let a = analyze(issue(1, "SQL Injection Vulnerability"));
        assert_eq!(a.analysis.classification.issue_type, IssueType::Security);
        assert_eq!(a.analysis.classification.priority, 4);
        assert!(a.analysis.solution.starts_with("1. URGENT"));
        assert!(a.plan.is_none());
    }

    #[test]
    fn test_analyze_with_plan_attaches_scaffold() {
        let a = analyze_with_plan(issue(1, "Add Login Button"));
        let plan: &SolutionPlan = a.plan.as_ref().unwrap();
        assert_eq!(plan.files_created.len(), 2);
        assert_eq!(a.analysis.classification.issue_type, IssueType::Security);
    }

    #[test]
    fn test_rank_sorts_descending_and_is_stable() {
        // priorities [2, 4, 1, 2]; the two medium issues must keep input order
        let input = vec![
            analyzed(10, Criticality::Medium),
            analyzed(20, Criticality::Critical),
            analyzed(30, Criticality::Low),
            analyzed(40, Criticality::Medium),
        ];
        let ranked = rank(input);
        let ids: Vec<i64> = ranked.iter().map(|a| a.issue.id).collect();
        let priorities: Vec<u8> = ranked.iter().map(|a| a.priority()).collect();
        assert_eq!(priorities, vec![4, 2, 2, 1]);
        assert_eq!(ids, vec![20, 10, 40, 30]);
    }

    #[test]
    fn test_rank_empty_is_empty() {
        assert!(rank(vec![]).is_empty());
    }

    #[tokio::test]
    async fn test_triage_empty_batch() {
        let out = triage(vec![], "octocat/hello-world").await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_triage_ranks_batch() {
        let issues = vec![
            issue(1, "Typo in readme docs"),
            issue(2, "SQL injection in search"),
            issue(3, "Unused import statement"),
        ];
        let out = triage(issues, "octocat/hello-world").await.unwrap();
        let ids: Vec<i64> = out.iter().map(|a| a.issue.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(out[0].priority(), 4);
        assert_eq!(out[2].priority(), 1);
    }

    #[tokio::test]
    async fn test_triage_preserves_input_order_for_ties() {
        // all four classify as bug/medium
        let issues = vec![
            issue(1, "Strange behaviour one"),
            issue(2, "Strange behaviour two"),
            issue(3, "Strange behaviour three"),
            issue(4, "Strange behaviour four"),
        ];
        let out = triage(issues, "").await.unwrap();
        let ids: Vec<i64> = out.iter().map(|a| a.issue.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_triage_is_deterministic() {
        let mk = || {
            vec![
                issue(1, "Crash on save"),
                issue(2, "Add dark mode"),
                issue(3, "App is slow"),
            ]
        };
        let a = triage(mk(), "ctx").await.unwrap();
        let b = triage(mk(), "ctx").await.unwrap();
        let ids = |v: &[AnalyzedIssue]| v.iter().map(|a| a.issue.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }
}
