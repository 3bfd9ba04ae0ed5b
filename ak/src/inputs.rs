//! Parsing of action inputs
//!
//! Action inputs always arrive as strings. Lists are comma separated and
//! booleans are the literal `true`; everything else counts as false.

use thiserror::Error;
use tracing::debug;

const HEADS_PREFIX: &str = "refs/heads/";

/// Errors raised while interpreting action inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Required input '{0}' is empty")]
    Empty(String),

    #[error("Ref '{0}' does not name a branch")]
    NotABranch(String),
}

/// Split a comma separated input into trimmed, non-empty entries
pub fn parse_list(raw: &str) -> Vec<String> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();
    debug!(%raw, count = items.len(), "parse_list: parsed");
    items
}

/// Interpret a boolean-as-string input; only `true` is true
pub fn parse_flag(raw: &str) -> bool {
    raw.trim() == "true"
}

/// clap value parser wrapper around [`parse_flag`]
pub fn parse_flag_arg(raw: &str) -> Result<bool, String> {
    Ok(parse_flag(raw))
}

/// Reject an input that is empty after trimming
pub fn require(name: &str, raw: &str) -> Result<String, InputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InputError::Empty(name.to_string()));
    }
    Ok(value.to_string())
}

/// Extract the branch name from a fully qualified ref such as `refs/heads/main`
///
/// Branch names may themselves contain slashes (`release/1.x`), so only the
/// `refs/heads/` prefix is removed. Tag and pull refs are rejected.
pub fn branch_from_ref(git_ref: &str) -> Result<String, InputError> {
    debug!(%git_ref, "branch_from_ref: called");
    match git_ref.trim().strip_prefix(HEADS_PREFIX) {
        Some(branch) if !branch.is_empty() => Ok(branch.to_string()),
        _ => Err(InputError::NotABranch(git_ref.to_string())),
    }
}
