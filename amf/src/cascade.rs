//! Merge-forward cascade across a branch chain
//!
//! Each adjacent pair `(previous, current)` is judged on the authors of the
//! commits `previous` has that `current` lacks:
//!
//! - exactly the designated author: merge and queue `current` for push
//! - anything else, nothing queued yet: stop cleanly, later pairs are only logged
//! - anything else, something queued: abort, a partial cascade cannot be pushed

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::branches::BranchList;
use crate::error::CascadeError;
use crate::git::{AuthorAttribution, GitOps, PREVIOUS_BRANCH};

/// Settings for one cascade run
#[derive(Debug, Clone)]
pub struct CascadeConfig {
    /// Author whose exclusive authorship allows a merge
    pub from_author: String,

    /// Strategy passed through to `git merge -s`
    pub merge_strategy: String,

    /// Compare author names or emails
    pub attribution: AuthorAttribution,

    /// Report instead of pushing
    pub dry_run: bool,

    /// Branch the workflow was triggered on; it is deepened instead of fetched
    pub origin_branch: Option<String>,
}

impl CascadeConfig {
    pub fn new(from_author: impl Into<String>) -> Self {
        Self {
            from_author: from_author.into(),
            merge_strategy: crate::DEFAULT_MERGE_STRATEGY.to_string(),
            attribution: AuthorAttribution::Name,
            dry_run: false,
            origin_branch: None,
        }
    }
}

/// Unique authors of the commits one branch has over another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorSet {
    commit_count: usize,
    authors: BTreeSet<String>,
}

impl AuthorSet {
    /// Build from one author entry per commit
    pub fn from_log(entries: Vec<String>) -> Self {
        Self {
            commit_count: entries.len(),
            authors: entries.into_iter().collect(),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commit_count
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// True only for a single author equal to `author`
    pub fn is_exclusively(&self, author: &str) -> bool {
        self.authors.len() == 1 && self.authors.contains(author)
    }
}

/// Verdict for one branch pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    /// Merge the pair and queue the later branch
    Continue,
    /// Stop merging; nothing has been queued so nothing is left half done
    HaltClean,
    /// A queued branch depends on this pair; the run must abort
    HaltInconsistent,
}

/// Push queue built while walking the chain
///
/// Append-only until the cascade halts, frozen afterwards.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    pending: Vec<String>,
    halted: bool,
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what to do with a pair given its author set
    pub fn judge(&self, authors: &AuthorSet, designated: &str) -> CascadeStep {
        if self.halted {
            return CascadeStep::HaltClean;
        }
        if authors.is_exclusively(designated) {
            CascadeStep::Continue
        } else if self.pending.is_empty() {
            CascadeStep::HaltClean
        } else {
            CascadeStep::HaltInconsistent
        }
    }

    /// Apply a verdict for the pair ending at `current`
    pub fn record(&mut self, step: CascadeStep, current: &str) {
        match step {
            CascadeStep::Continue if !self.halted => self.pending.push(current.to_string()),
            CascadeStep::Continue | CascadeStep::HaltInconsistent => {}
            CascadeStep::HaltClean => self.halted = true,
        }
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn into_pending(self) -> Vec<String> {
        self.pending
    }
}

/// How a cascade run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// No pair qualified for a merge
    NothingToPush,
    /// Branches were merged locally but not pushed
    DryRun { branches: Vec<String> },
    /// Branches were merged and pushed atomically
    Pushed { branches: Vec<String> },
}

impl CascadeOutcome {
    /// Branches merged during the run, in chain order
    pub fn branches(&self) -> &[String] {
        match self {
            Self::NothingToPush => &[],
            Self::DryRun { branches } | Self::Pushed { branches } => branches,
        }
    }
}

/// Make every listed branch available locally
///
/// The triggering branch only needs its history deepened; the others are
/// fetched and checked out once so a local branch exists, then the previous
/// checkout is restored.
pub async fn ensure_branches(
    git: &dyn GitOps,
    branches: &BranchList,
    origin_branch: Option<&str>,
) -> Result<(), CascadeError> {
    debug!(?origin_branch, "ensure_branches: called");
    for branch in branches.iter() {
        if Some(branch) == origin_branch {
            git.fetch(branch, true).await?;
            continue;
        }
        git.fetch(branch, false).await?;
        git.switch_to(branch).await?;
        git.switch_to(PREVIOUS_BRANCH).await?;
    }
    Ok(())
}

/// Run the cascade over a raw branch list
///
/// The list is validated before any repository operation.
pub async fn run_cascade(
    git: &dyn GitOps,
    branches: &[String],
    config: &CascadeConfig,
) -> Result<CascadeOutcome, CascadeError> {
    let branches = BranchList::new(branches.to_vec())?;
    info!(
        branches = branches.iter().count(),
        from_author = %config.from_author,
        strategy = %config.merge_strategy,
        dry_run = config.dry_run,
        "Starting merge-forward cascade"
    );

    ensure_branches(git, &branches, config.origin_branch.as_deref()).await?;

    let mut state = CascadeState::new();
    for (previous, current) in branches.pairs() {
        let authors = AuthorSet::from_log(git.log_authors(previous, current, config.attribution).await?);
        info!(
            "Found {} commits in {} that are not present in {}",
            authors.commit_count(),
            previous,
            current
        );
        info!("Found {} unique commit actors", authors.len());
        if authors.is_empty() {
            debug!(%previous, %current, "run_cascade: nothing to merge forward for pair");
        }

        let step = state.judge(&authors, &config.from_author);
        debug!(%previous, %current, ?step, "run_cascade: judged pair");
        match step {
            CascadeStep::Continue => {
                info!(
                    "Merging {} into {} using {} strategy",
                    previous, current, config.merge_strategy
                );
                git.switch_to(current).await?;
                git.merge(previous, &config.merge_strategy).await?;
            }
            CascadeStep::HaltClean if state.is_halted() => {
                info!("Cascade already stopped, not merging {} into {}", previous, current);
            }
            CascadeStep::HaltClean => {
                info!(
                    "Expected author '{}' not found or there are multiple authors",
                    config.from_author
                );
            }
            CascadeStep::HaltInconsistent => {
                warn!(
                    "Expected author '{}' not found or there are multiple authors",
                    config.from_author
                );
                return Err(CascadeError::Inconsistent {
                    previous: previous.to_string(),
                    current: current.to_string(),
                    queued: state.into_pending(),
                });
            }
        }
        state.record(step, current);
    }

    let pending = state.into_pending();
    if pending.is_empty() {
        info!("No branches to push");
        return Ok(CascadeOutcome::NothingToPush);
    }
    if config.dry_run {
        info!("Dry-run is true, not invoking push this time");
        return Ok(CascadeOutcome::DryRun { branches: pending });
    }

    git.push(&pending).await?;
    info!(branches = ?pending, "Pushed merged branches");
    Ok(CascadeOutcome::Pushed { branches: pending })
}
