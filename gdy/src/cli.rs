//! CLI argument parsing for dependabotgen

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gdy")]
#[command(author, version, about = "Expand a dependabot template per maintained branch", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Comma separated branches that receive gradle updates
    #[arg(long, env = "INPUT_GRADLE-BRANCHES", default_value = "")]
    pub gradle_branches: String,

    /// Comma separated branches that receive github-actions updates
    #[arg(long, env = "INPUT_GITHUB-ACTIONS-BRANCHES", default_value = "")]
    pub github_actions_branches: String,

    /// Template to expand
    #[arg(long, env = "INPUT_TEMPLATE-FILE", default_value = "")]
    pub template_file: String,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
