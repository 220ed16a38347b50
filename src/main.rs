mod actions;
mod config;
mod github;
mod label;
mod labeler;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

use actions::ActionsCore;
use github::{GitHubClient, RepoContext};

/// PR Labeler — CI step that marks a GitHub Pull Request as AI-reviewed.
///
/// Reads the PR number from PR_NUMBER and adds the `ai:reviewed` label.
#[derive(Parser, Debug)]
#[command(name = "pr-labeler", version, about)]
struct Cli {
    /// Repository as owner/repo. Defaults to GITHUB_REPOSITORY.
    #[arg(long)]
    repo: Option<String>,

    /// Config file path (default: .pr-labeler.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load(cli.config.as_deref())?;
    let client = GitHubClient::from_config(&config)?;
    debug!(api_url = %config.api_url(), "GitHub client ready");

    let repo = match cli.repo.as_deref() {
        Some(slug) => RepoContext::parse(slug)?,
        None => RepoContext::from_env()?,
    };
    let _main_span = info_span!("pr_label", repo = %repo).entered();

    let core = ActionsCore::new();
    let outcome = labeler::run(|key: &str| std::env::var(key).ok(), &repo, &client, &core).await?;
    match outcome {
        labeler::Outcome::Labeled(pr) => info!(pr, "done"),
        labeler::Outcome::InvalidInput => info!("done without labeling"),
    }

    if core.failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
