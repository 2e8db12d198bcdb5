//! Typed error hierarchy for the triage engine.
//!
//! One top-level enum covers the whole pipeline; the HTTP layer maps each
//! variant to a status code and a deliberately generic client-facing message
//! so callers never learn which issue in a batch failed.

use thiserror::Error;

/// Errors from triage, synthesis, and the issue source.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid request body")]
    InputMalformed,

    #[error("AI analysis failed")]
    BatchFailure,

    #[error("Failed to generate AI solution")]
    SynthesisFailure,

    #[error("GitHub API error: {0}")]
    IssueSource(String),

    #[error("Invalid repository: {0}")]
    InvalidRepo(String),

    #[error("Issue {number} not found in {repo}")]
    IssueNotFound { repo: String, number: i64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
