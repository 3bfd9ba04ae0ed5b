use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use actionkit::{branch_from_ref, inputs, parse_list, setup_logging, workflow};
use automergeforward::cli::Cli;
use automergeforward::config::Config;
use automergeforward::{AuthorAttribution, CascadeConfig, CascadeOutcome, GitCli, run_cascade};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => workflow::fail(&e),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("automergeforward starting");

    let from_author = inputs::require("from-author", &cli.from_author)?;
    let branches = parse_list(&cli.branches);
    let origin_branch = cli.origin_ref.as_deref().and_then(|r| match branch_from_ref(r) {
        Ok(branch) => Some(branch),
        Err(e) => {
            warn!("{}; no branch will be deepened", e);
            None
        }
    });
    debug!(?branches, ?origin_branch, "run: resolved inputs");

    let cascade = CascadeConfig {
        from_author,
        merge_strategy: cli.merge_strategy,
        attribution: AuthorAttribution::from_use_email(cli.use_author_email),
        dry_run: cli.dry_run,
        origin_branch,
    };
    let remote = cli.remote.unwrap_or(config.remote);
    let git = GitCli::new(&cli.repo, remote);
    info!(remote = git.remote(), repo = %cli.repo.display(), "Using working copy");

    let outcome = run_cascade(&git, &branches, &cascade).await?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &CascadeOutcome) {
    match outcome {
        CascadeOutcome::NothingToPush => {
            workflow::info(&format!("{} Nothing to merge forward", "-".dimmed()));
        }
        CascadeOutcome::DryRun { branches } => {
            workflow::info(&format!(
                "{} Dry run, would push: {}",
                "~".yellow(),
                branches.join(" ").cyan()
            ));
        }
        CascadeOutcome::Pushed { branches } => {
            workflow::info(&format!("{} Pushed: {}", "✓".green(), branches.join(" ").cyan()));
        }
    }
}
