//! Version-control capability used by the cascade
//!
//! The cascade only needs five operations. Production code runs them through
//! the `git` CLI ([`GitCli`]); tests drive an in-memory commit graph.

mod cli;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use cli::GitCli;

/// Switch target that returns to the previously checked out branch
pub const PREVIOUS_BRANCH: &str = "-";

/// Errors from running version-control operations
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} failed ({status}): {stderr}")]
    CommandFailed { args: String, status: String, stderr: String },
}

/// How commits are attributed when comparing against the designated author
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorAttribution {
    /// Author name (`%an`)
    #[default]
    Name,
    /// Author email (`%ae`)
    Email,
}

impl AuthorAttribution {
    pub fn from_use_email(use_email: bool) -> Self {
        if use_email { Self::Email } else { Self::Name }
    }

    /// `git log --format` placeholder for this attribution
    pub fn log_format(&self) -> &'static str {
        match self {
            Self::Name => "%an",
            Self::Email => "%ae",
        }
    }
}

/// Operations the cascade performs against a working copy
#[async_trait]
pub trait GitOps: Send + Sync {
    /// Fetch `branch` from the remote; `deepen` converts a shallow history to a full one
    async fn fetch(&self, branch: &str, deepen: bool) -> Result<(), GitError>;

    /// Check out `branch`, or the previous branch for [`PREVIOUS_BRANCH`]
    async fn switch_to(&self, branch: &str) -> Result<(), GitError>;

    /// Authors of non-merge commits reachable from `previous` but not from `current`,
    /// one entry per commit
    async fn log_authors(
        &self,
        previous: &str,
        current: &str,
        attribution: AuthorAttribution,
    ) -> Result<Vec<String>, GitError>;

    /// Merge `branch` into the checked out branch with the given strategy
    async fn merge(&self, branch: &str, strategy: &str) -> Result<(), GitError>;

    /// Push all `branches` to the remote in one atomic push
    async fn push(&self, branches: &[String]) -> Result<(), GitError>;
}
