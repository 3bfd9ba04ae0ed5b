//! Tracing setup for the action binaries

use eyre::Result;
use tracing::{Level, info};

/// Map a level name to a tracing level, defaulting to INFO for unknown names
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        other => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            Level::INFO
        }
    }
}

/// Initialise logging to stderr
///
/// Level priority: CLI `--log-level` > config file > INFO. `RUST_LOG`
/// directives are honoured on top of the chosen level. Stdout is left to
/// workflow commands.
pub fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let level = cli_log_level.or(config_log_level).map(parse_level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install tracing subscriber: {}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}
