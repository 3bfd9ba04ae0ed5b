//! AutoMergeForward - cascade bot-authored commits across release branches
//!
//! Given an ordered chain of branches (oldest maintenance line first), each
//! adjacent pair is inspected. When every non-merge commit that the earlier
//! branch has and the later one lacks was written by a single designated
//! author, the earlier branch is merged into the later one. The merged
//! branches are then pushed in one atomic push.
//!
//! # Modules
//!
//! - [`git`] - the `GitOps` capability and its `git` CLI implementation
//! - [`branches`] - validated branch chains
//! - [`cascade`] - the pairwise decision and the cascade driver
//! - [`config`] - configuration file loading
//! - [`cli`] - command-line interface

pub mod branches;
pub mod cascade;
pub mod cli;
pub mod config;
mod error;
pub mod git;

pub use branches::BranchList;
pub use cascade::{AuthorSet, CascadeConfig, CascadeOutcome, CascadeState, CascadeStep, run_cascade};
pub use config::Config;
pub use error::CascadeError;
pub use git::{AuthorAttribution, GitCli, GitError, GitOps};

/// Name used for config file discovery
pub const APP_NAME: &str = "automergeforward";

/// Default remote that branches are fetched from and pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Default strategy handed to `git merge -s`
pub const DEFAULT_MERGE_STRATEGY: &str = "ours";
