//! GitHub issue source and commit sink contract.
//!
//! The engine only reads from GitHub: it lists open issues and fetches single
//! issues, mapping the API payload into the engine's [`Issue`]. The commit
//! sink types describe the payload a downstream committer expects; nothing
//! here ever writes to a repository.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TriageError;
use crate::triage::models::{FileArtifact, Issue, IssueState};

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = "issueforge";

/// A GitHub issue as the API delivers it (subset of fields).
#[derive(Debug, Serialize, Deserialize)]
pub struct GitHubIssue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub user: Option<GitHubUser>,
    /// Pull requests also come through the issues endpoint; filter them out.
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

impl GitHubIssue {
    /// Map the API payload into the engine's issue type.
    pub fn into_issue(self) -> Issue {
        let state = self.state.parse().unwrap_or(IssueState::Open);
        Issue {
            id: self.id,
            title: self.title,
            body: self.body,
            state,
            author: self
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| "ghost".to_string()),
        }
    }
}

/// Payload handed to the commit sink after solution synthesis.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub files: Vec<FileArtifact>,
    pub commit_message: String,
    pub issue_title: String,
}

/// Commit sink response; a successful commit carries the opened pull request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub url: String,
}

/// Build a commit sink payload from a synthesized plan.
///
/// Created and modified artifacts travel in one flat `files` list, in that
/// order.
pub fn commit_request(
    issue_title: &str,
    commit_message: String,
    files_created: &[FileArtifact],
    files_modified: &[FileArtifact],
) -> CommitRequest {
    let mut files = Vec::with_capacity(files_created.len() + files_modified.len());
    files.extend_from_slice(files_created);
    files.extend_from_slice(files_modified);
    CommitRequest {
        files,
        commit_message,
        issue_title: issue_title.to_string(),
    }
}

/// Parse the `owner/repo` slug from a GitHub URL or a bare slug.
///
/// Handles:
/// - `https://github.com/owner/repo`
/// - `https://github.com/owner/repo.git`
/// - `owner/repo`
pub fn parse_owner_repo(input: &str) -> Option<String> {
    let path = input
        .strip_prefix("https://")
        .and_then(|rest| rest.strip_prefix("github.com/"))
        .unwrap_or(input);
    let path = path.strip_suffix(".git").unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() && !path.contains(':') {
        Some(format!("{}/{}", parts[0], parts[1]))
    } else {
        None
    }
}

fn get(client: &reqwest::Client, url: &str, token: Option<&str>) -> reqwest::RequestBuilder {
    let mut req = client.get(url).header("User-Agent", USER_AGENT);
    if let Some(token) = token {
        req = req.header("Authorization", format!("Bearer {}", token));
    }
    req
}

fn source_err(context: &str, err: impl std::fmt::Display) -> TriageError {
    TriageError::IssueSource(format!("{}: {}", context, err))
}

/// List open issues for a repository (excludes pull requests).
/// Paginates through all pages automatically; the token is optional.
pub async fn list_issues(token: Option<&str>, owner_repo: &str) -> Result<Vec<Issue>, TriageError> {
    let client = reqwest::Client::new();
    let url = format!("{}/repos/{}/issues", GITHUB_API, owner_repo);
    let mut all_issues = Vec::new();
    let mut page = 1u32;

    loop {
        let resp: Vec<GitHubIssue> = get(&client, &url, token)
            .query(&[
                ("state", "open"),
                ("per_page", "100"),
                ("page", &page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| source_err("Failed to send issues request", e))?
            .error_for_status()
            .map_err(|e| source_err("GitHub issues API returned error status", e))?
            .json()
            .await
            .map_err(|e| source_err("Failed to parse issues response", e))?;

        let count = resp.len();
        all_issues.extend(
            resp.into_iter()
                .filter(|i| i.pull_request.is_none())
                .map(GitHubIssue::into_issue),
        );

        if count < 100 {
            break;
        }
        page += 1;
    }

    debug!(repo = owner_repo, count = all_issues.len(), "fetched issues");
    Ok(all_issues)
}

/// Fetch a single issue by number.
pub async fn get_issue(
    token: Option<&str>,
    owner_repo: &str,
    number: i64,
) -> Result<Issue, TriageError> {
    let client = reqwest::Client::new();
    let url = format!("{}/repos/{}/issues/{}", GITHUB_API, owner_repo, number);
    let resp = get(&client, &url, token)
        .send()
        .await
        .map_err(|e| source_err("Failed to send issue request", e))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(TriageError::IssueNotFound {
            repo: owner_repo.to_string(),
            number,
        });
    }

    let issue: GitHubIssue = resp
        .error_for_status()
        .map_err(|e| source_err("GitHub issue API returned error status", e))?
        .json()
        .await
        .map_err(|e| source_err("Failed to parse issue response", e))?;

    Ok(issue.into_issue())
}
