//! Cascade error types

use thiserror::Error;

use crate::git::GitError;

/// Errors that end a cascade run
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("Please specify at least 2 branches (got {count})")]
    TooFewBranches { count: usize },

    #[error(
        "Aborted because cannot guarantee the successful merge between all branches: \
         '{previous}' into '{current}' failed the author check after merging {queued:?}"
    )]
    Inconsistent {
        previous: String,
        current: String,
        queued: Vec<String>,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

impl CascadeError {
    /// Whether the run failed before touching the repository
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::TooFewBranches { .. })
    }
}
