use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "issueforge")]
#[command(version, about = "Rule-based GitHub issue triage and solution synthesis")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Enable dev mode (permissive CORS, bind all interfaces)
        #[arg(long)]
        dev: bool,
    },
    /// Fetch open issues for a repository and print a ranked triage table
    Triage {
        /// Repository as owner/repo or a GitHub URL
        repo: String,
    },
    /// Print the solution plan and commit message for one issue
    Plan {
        /// Repository as owner/repo or a GitHub URL
        repo: String,

        /// Issue number
        number: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "issueforge=debug"
    } else {
        "issueforge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let token = std::env::var("GITHUB_TOKEN").ok();

    match &cli.command {
        Commands::Serve { port, dev } => {
            cmd::cmd_serve(*port, *dev).await?;
        }
        Commands::Triage { repo } => {
            cmd::cmd_triage(repo, token.as_deref()).await?;
        }
        Commands::Plan { repo, number } => {
            cmd::cmd_plan(repo, *number, token.as_deref()).await?;
        }
    }

    Ok(())
}
