//! Workflow commands understood by the CI runner
//!
//! The runner scans stdout for lines of the form `::name::message`. Messages
//! must be escaped so that multi-line errors stay on one command line.

use std::process::ExitCode;

use tracing::debug;

/// Escape a message for use as workflow command data
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Format a workflow command line
pub fn format_command(name: &str, message: &str) -> String {
    format!("::{}::{}", name, escape_data(message))
}

/// Write a plain line to the runner log
pub fn info(message: &str) {
    println!("{}", message);
}

/// Emit a warning annotation
pub fn warning(message: &str) {
    println!("{}", format_command("warning", message));
}

/// Emit an error annotation
pub fn error(message: &str) {
    println!("{}", format_command("error", message));
}

/// Report a fatal error through the failure channel and produce a failing exit code
///
/// The whole error chain is rendered, outermost context first.
pub fn fail(report: &eyre::Report) -> ExitCode {
    let message = format!("{:#}", report);
    debug!(%message, "fail: reporting failure");
    error(&message);
    ExitCode::FAILURE
}
