use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use actionkit::{inputs, setup_logging, workflow};
use dependabotgen::cli::Cli;
use dependabotgen::config::Config;
use dependabotgen::{BranchMatrix, GenerateOptions, Generated, generate};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => workflow::fail(&e),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("dependabotgen starting");

    let template_file = inputs::require("template-file", &cli.template_file)?;
    let options = GenerateOptions {
        template_file: PathBuf::from(template_file),
        output_path: cli.output.unwrap_or(config.output_path),
        matrix: BranchMatrix::from_inputs(&cli.gradle_branches, &cli.github_actions_branches),
    };

    let generated = generate(&options).context("Failed to generate dependabot configuration")?;
    report(&generated);
    Ok(())
}

fn report(generated: &Generated) {
    for dropped in &generated.dropped {
        workflow::warning(&format!(
            "Dropped update #{} with unrecognized package-ecosystem {}",
            dropped.index,
            dropped.classifier.as_deref().unwrap_or("<missing>")
        ));
    }
    workflow::info(&format!(
        "{} Wrote {} updates to {}",
        "✓".green(),
        generated.update_count,
        generated.output_path.display().to_string().cyan()
    ));
}
