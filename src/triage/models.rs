use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an issue as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for IssueState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Invalid issue state: {}", s)),
        }
    }
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw issue as delivered by the issue source. Immutable input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: IssueState,
    pub author: String,
}

impl Issue {
    /// Body text with a missing body treated as the empty string.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Lower-cased `title body` text that the keyword rules run over.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.body_text()).to_lowercase()
    }
}

/// Category assigned to an issue by the type rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Bug,
    Security,
    Feature,
    Enhancement,
    Documentation,
    Performance,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Security => "security",
            Self::Feature => "feature",
            Self::Enhancement => "enhancement",
            Self::Documentation => "documentation",
            Self::Performance => "performance",
        }
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(Self::Bug),
            "security" => Ok(Self::Security),
            "feature" => Ok(Self::Feature),
            "enhancement" => Ok(Self::Enhancement),
            "documentation" => Ok(Self::Documentation),
            "performance" => Ok(Self::Performance),
            _ => Err(format!("Invalid issue type: {}", s)),
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal severity label assigned by the criticality rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

impl Criticality {
    /// Numeric priority derived one-to-one from the criticality.
    ///
    /// This is the only source of the `priority` integer attached to issues:
    /// critical→4, high→3, medium→2, low→1.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Criticality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid criticality: {}", s)),
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(type, criticality, priority)` triple assigned to an issue.
///
/// `priority` is always `criticality.priority()`; construct through
/// [`Classification::new`] so the invariant cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub criticality: Criticality,
    pub priority: u8,
}

impl Classification {
    pub fn new(issue_type: IssueType, criticality: Criticality) -> Self {
        Self {
            issue_type,
            criticality,
            priority: criticality.priority(),
        }
    }
}

/// A proposed file to create, or a described change to an existing file.
///
/// Artifacts are data returned to the caller; the engine never writes them.
/// Created files carry `content`, modifications carry `changes`, matching the
/// commit sink's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileArtifact {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
    pub description: String,
}

impl FileArtifact {
    /// A new file to be created with the given content.
    pub fn created(
        path: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            changes: None,
            description: description.into(),
        }
    }

    /// A described change to an existing file.
    pub fn modified(
        path: impl Into<String>,
        changes: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: None,
            changes: Some(changes.into()),
            description: description.into(),
        }
    }
}

/// Synthesized remediation plan for a single issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionPlan {
    #[serde(rename = "solution")]
    pub summary: String,
    pub steps: Vec<String>,
    pub files_created: Vec<FileArtifact>,
    pub files_modified: Vec<FileArtifact>,
    pub estimated_time: String,
}

/// Classification plus the per-type remediation outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAnalysis {
    #[serde(flatten)]
    pub classification: Classification,
    pub solution: String,
}

/// An issue annotated with its triage results.
///
/// Constructed once per triage request and returned to the caller; the engine
/// does not persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedIssue {
    #[serde(flatten)]
    pub issue: Issue,
    pub analysis: IssueAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<SolutionPlan>,
}

impl AnalyzedIssue {
    pub fn priority(&self) -> u8 {
        self.analysis.classification.priority
    }
}
