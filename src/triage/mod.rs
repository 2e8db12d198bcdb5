//! Issue triage and solution synthesis engine.
//!
//! Module map:
//! - `models` — issue, classification, and solution plan types
//! - `classifier` — keyword-rule cascades for type and criticality
//! - `outline` — per-type five-step remediation outlines
//! - `scaffold` — keyword-dispatched file scaffolds and commit messages
//! - `orchestrator` — concurrent batch fan-out and priority ranking
//!
//! The whole engine is deterministic: given the same issues in the same
//! order, every function here produces byte-identical output.

pub mod classifier;
pub mod models;
pub mod orchestrator;
pub mod outline;
pub mod scaffold;

pub use classifier::classify;
pub use models::{
    AnalyzedIssue, Classification, Criticality, FileArtifact, Issue, IssueAnalysis, IssueState,
    IssueType, SolutionPlan,
};
pub use orchestrator::{analyze, analyze_with_plan, rank, triage};
pub use outline::outline;
pub use scaffold::{commit_message, synthesize};
