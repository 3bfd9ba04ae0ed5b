//! CLI argument parsing for automergeforward
//!
//! Every action input can also come from its `INPUT_*` environment variable,
//! which is how the CI runner hands inputs to an action.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use actionkit::inputs::parse_flag_arg;

#[derive(Parser, Debug)]
#[command(name = "amf")]
#[command(author, version, about = "Merge bot-only commits forward across release branches", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Author whose exclusive commits may be merged forward
    #[arg(long, env = "INPUT_FROM-AUTHOR", default_value = "")]
    pub from_author: String,

    /// Comma separated branch chain, oldest first
    #[arg(long, env = "INPUT_BRANCHES", default_value = "")]
    pub branches: String,

    /// Strategy passed to `git merge -s`
    #[arg(long, env = "INPUT_MERGE-STRATEGY", default_value = crate::DEFAULT_MERGE_STRATEGY)]
    pub merge_strategy: String,

    /// Merge locally but do not push ("true" to enable)
    #[arg(
        long,
        env = "INPUT_DRY-RUN",
        action = ArgAction::Set,
        value_parser = parse_flag_arg,
        default_value = "false"
    )]
    pub dry_run: bool,

    /// Attribute commits by author email instead of name ("true" to enable)
    #[arg(
        long,
        env = "INPUT_USE-AUTHOR-EMAIL",
        action = ArgAction::Set,
        value_parser = parse_flag_arg,
        default_value = "false"
    )]
    pub use_author_email: bool,

    /// Ref that triggered the run, e.g. refs/heads/main
    #[arg(long, env = "GITHUB_REF")]
    pub origin_ref: Option<String>,

    /// Remote to fetch from and push to (overrides config)
    #[arg(long)]
    pub remote: Option<String>,

    /// Working copy to operate on
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
}
