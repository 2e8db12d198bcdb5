//! Single-issue solution plan command — `issueforge plan <repo> <number>`.

use anyhow::{Result, bail};

use issueforge::github;
use issueforge::triage::orchestrator;
use issueforge::triage::scaffold;

pub async fn cmd_plan(repo: &str, number: i64, token: Option<&str>) -> Result<()> {
    let Some(owner_repo) = github::parse_owner_repo(repo) else {
        bail!("Invalid repository: {} (expected owner/repo or a GitHub URL)", repo);
    };

    let issue = github::get_issue(token, &owner_repo, number).await?;
    let analyzed = orchestrator::analyze_with_plan(issue);
    let c = &analyzed.analysis.classification;

    println!(
        "{}",
        console::style(format!("#{} {}", number, analyzed.issue.title))
            .bold()
            .cyan()
    );
    println!(
        "  {} {} (priority {})",
        console::style(c.issue_type.as_str()).magenta(),
        console::style(c.criticality.as_str()).yellow(),
        c.priority
    );
    println!();

    println!("{}", console::style("Outline").bold());
    println!("{}", analyzed.analysis.solution);
    println!();

    // analyze_with_plan always attaches a plan
    let Some(plan) = &analyzed.plan else {
        bail!("No solution plan produced for issue {}", number);
    };

    println!("{}", console::style("Solution").bold());
    println!("{}", plan.summary);
    println!("Estimated time: {}", plan.estimated_time);
    println!();

    println!("{}", console::style("Steps").bold());
    for step in &plan.steps {
        println!("  - {}", step);
    }
    println!();

    if !plan.files_created.is_empty() {
        println!("{}", console::style("Files created").bold());
        for f in &plan.files_created {
            println!("  {} ({})", console::style(&f.path).green(), f.description);
        }
        println!();
    }
    if !plan.files_modified.is_empty() {
        println!("{}", console::style("Files modified").bold());
        for f in &plan.files_modified {
            println!("  {} ({})", console::style(&f.path).yellow(), f.description);
        }
        println!();
    }

    println!("{}", console::style("Commit message").bold());
    println!("{}", scaffold::commit_message(&analyzed));

    Ok(())
}
