use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::TriageError;
use crate::github;
use crate::triage::models::{AnalyzedIssue, Issue, SolutionPlan};
use crate::triage::{orchestrator, scaffold};

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub github_token: Option<String>,
}

pub type SharedState = Arc<AppState>;

// ── Request / response payload types ──────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub repo_context: String,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub issues: Vec<AnalyzedIssue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRequest {
    pub issue: Issue,
    #[serde(default)]
    pub repo_context: String,
}

#[derive(Serialize)]
pub struct SolutionResponse {
    pub solution: SolutionPlan,
}

#[derive(Deserialize)]
pub struct IssuesQuery {
    pub repo: String,
}

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::InputMalformed => ApiError::BadRequest(err.to_string()),
            TriageError::IssueNotFound { .. } => ApiError::NotFound(err.to_string()),
            TriageError::InvalidRepo(_) => ApiError::BadRequest(err.to_string()),
            TriageError::BatchFailure
            | TriageError::SynthesisFailure
            | TriageError::IssueSource(_)
            | TriageError::Other(_) => ApiError::Internal(err.to_string()),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/analysis", post(analyze_issues))
        .route("/api/solution", post(synthesize_solution))
        .route("/api/issues", get(list_repo_issues))
        .route("/health", get(health_check))
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Triage a batch of issues. All-or-nothing: any per-issue failure returns a
/// generic 500 with no partial results.
async fn analyze_issues(
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::from(TriageError::InputMalformed))?;
    info!(count = req.issues.len(), repo = %req.repo_context, "analysis request");

    let issues = orchestrator::triage(req.issues, &req.repo_context)
        .await
        .map_err(|err| {
            warn!(error = %err, "batch analysis failed");
            ApiError::from(TriageError::BatchFailure)
        })?;

    Ok(Json(AnalysisResponse { issues }))
}

/// Synthesize a solution plan for one issue.
async fn synthesize_solution(
    body: Result<Json<SolutionRequest>, JsonRejection>,
) -> Result<Json<SolutionResponse>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::from(TriageError::InputMalformed))?;
    info!(issue = req.issue.id, title = %req.issue.title, repo = %req.repo_context, "solution request");

    let solution = tokio::task::spawn_blocking(move || scaffold::synthesize(&req.issue))
        .await
        .map_err(|err| {
            warn!(error = %err, "solution synthesis failed");
            ApiError::from(TriageError::SynthesisFailure)
        })?;

    Ok(Json(SolutionResponse { solution }))
}

/// Proxy to the issue source: open issues for a repo, pull requests excluded.
async fn list_repo_issues(
    State(state): State<SharedState>,
    Query(query): Query<IssuesQuery>,
) -> Result<Json<Vec<Issue>>, ApiError> {
    let owner_repo = github::parse_owner_repo(&query.repo)
        .ok_or_else(|| ApiError::from(TriageError::InvalidRepo(query.repo.clone())))?;
    let issues = github::list_issues(state.github_token.as_deref(), &owner_repo).await?;
    Ok(Json(issues))
}
