//! Batch triage command — `issueforge triage <repo>`.

use anyhow::{Result, bail};

use issueforge::github;
use issueforge::triage::models::Criticality;
use issueforge::triage::orchestrator;

pub async fn cmd_triage(repo: &str, token: Option<&str>) -> Result<()> {
    let Some(owner_repo) = github::parse_owner_repo(repo) else {
        bail!("Invalid repository: {} (expected owner/repo or a GitHub URL)", repo);
    };

    let issues = github::list_issues(token, &owner_repo).await?;
    if issues.is_empty() {
        println!("No open issues in {}.", owner_repo);
        return Ok(());
    }

    let count = issues.len();
    let analyzed = orchestrator::triage(issues, &owner_repo).await?;

    println!(
        "{}",
        console::style(format!("Triage for {} ({} open issues)", owner_repo, count))
            .bold()
            .cyan()
    );
    println!();

    for a in &analyzed {
        let c = &a.analysis.classification;
        let crit = console::style(format!("{:>8}", c.criticality.as_str()));
        let crit = match c.criticality {
            Criticality::Critical => crit.red().bold(),
            Criticality::High => crit.red(),
            Criticality::Medium => crit.yellow(),
            Criticality::Low => crit.dim(),
        };
        println!(
            "  P{} {} {:>13}  #{} {}",
            c.priority,
            crit,
            console::style(c.issue_type.as_str()).dim(),
            a.issue.id,
            a.issue.title
        );
    }

    Ok(())
}
