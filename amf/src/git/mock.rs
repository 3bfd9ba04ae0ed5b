//! In-memory commit graph implementing [`GitOps`] for unit tests

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{AuthorAttribution, GitError, GitOps, PREVIOUS_BRANCH};

/// Name recorded on merge commits created by the fake
pub const MERGER: &str = "Merger";

/// Recorded operation, for asserting call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Fetch { branch: String, deepen: bool },
    SwitchTo(String),
    LogAuthors { previous: String, current: String },
    Merge { branch: String, strategy: String },
    Push(Vec<String>),
}

#[derive(Debug, Clone)]
struct FakeCommit {
    name: String,
    email: String,
    parents: Vec<usize>,
}

#[derive(Debug, Default)]
struct MockState {
    commits: Vec<FakeCommit>,
    branches: HashMap<String, usize>,
    head: Option<String>,
    previous_head: Option<String>,
    calls: Vec<GitCall>,
    fail_on: Option<&'static str>,
}

impl MockState {
    fn tip(&self, branch: &str) -> Result<usize, GitError> {
        self.branches.get(branch).copied().ok_or_else(|| GitError::CommandFailed {
            args: format!("rev-parse {}", branch),
            status: "exit status: 128".to_string(),
            stderr: format!("fatal: ambiguous argument '{}': unknown revision", branch),
        })
    }

    fn ancestors(&self, tip: usize) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![tip];
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(self.commits[id].parents.iter().copied());
            }
        }
        seen
    }

    fn check_failure(&self, op: &'static str) -> Result<(), GitError> {
        if self.fail_on == Some(op) {
            return Err(GitError::CommandFailed {
                args: op.to_string(),
                status: "exit status: 1".to_string(),
                stderr: format!("injected {} failure", op),
            });
        }
        Ok(())
    }
}

/// Fake working copy: a commit DAG, named branch tips and a checkout
///
/// Every branch starts from a shared root commit authored by `Initial`.
pub struct MockGit {
    state: Mutex<MockState>,
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGit {
    pub fn new() -> Self {
        let state = MockState {
            commits: vec![FakeCommit {
                name: "Initial".to_string(),
                email: "initial@example.com".to_string(),
                parents: vec![],
            }],
            ..Default::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    /// Create branches pointing at the root commit
    pub fn with_branches(names: &[&str]) -> Self {
        let git = Self::new();
        {
            let mut state = git.state.lock().unwrap();
            for name in names {
                state.branches.insert(name.to_string(), 0);
            }
            state.head = names.last().map(|n| n.to_string());
        }
        git
    }

    /// Add a commit by `author` (email `<author>@example.com`) on top of `branch`
    pub fn commit(&self, branch: &str, author: &str) {
        let email = format!("{}@example.com", author.to_lowercase().replace(' ', "-"));
        self.commit_as(branch, author, &email);
    }

    pub fn commit_as(&self, branch: &str, name: &str, email: &str) {
        let mut state = self.state.lock().unwrap();
        let parent = state.branches[branch];
        state.commits.push(FakeCommit {
            name: name.to_string(),
            email: email.to_string(),
            parents: vec![parent],
        });
        let id = state.commits.len() - 1;
        state.branches.insert(branch.to_string(), id);
    }

    /// Make every call of `op` fail: "fetch", "switch", "log", "merge" or "push"
    pub fn fail_on(&self, op: &'static str) {
        self.state.lock().unwrap().fail_on = Some(op);
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn merges(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GitCall::Merge { branch, strategy } => Some((branch, strategy)),
                _ => None,
            })
            .collect()
    }

    pub fn pushes(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GitCall::Push(branches) => Some(branches),
                _ => None,
            })
            .collect()
    }

    pub fn head(&self) -> Option<String> {
        self.state.lock().unwrap().head.clone()
    }

    /// Whether `ancestor`'s tip is reachable from `branch`'s tip
    pub fn contains(&self, branch: &str, ancestor: &str) -> bool {
        let state = self.state.lock().unwrap();
        let tip = state.branches[branch];
        let other = state.branches[ancestor];
        state.ancestors(tip).contains(&other)
    }
}

#[async_trait]
impl GitOps for MockGit {
    async fn fetch(&self, branch: &str, deepen: bool) -> Result<(), GitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GitCall::Fetch {
            branch: branch.to_string(),
            deepen,
        });
        state.check_failure("fetch")?;
        state.tip(branch).map(|_| ())
    }

    async fn switch_to(&self, branch: &str) -> Result<(), GitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GitCall::SwitchTo(branch.to_string()));
        state.check_failure("switch")?;
        let target = if branch == PREVIOUS_BRANCH {
            state.previous_head.clone().ok_or_else(|| GitError::CommandFailed {
                args: "switch -".to_string(),
                status: "exit status: 128".to_string(),
                stderr: "fatal: invalid reference: @{-1}".to_string(),
            })?
        } else {
            state.tip(branch)?;
            branch.to_string()
        };
        state.previous_head = state.head.replace(target);
        Ok(())
    }

    async fn log_authors(
        &self,
        previous: &str,
        current: &str,
        attribution: AuthorAttribution,
    ) -> Result<Vec<String>, GitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GitCall::LogAuthors {
            previous: previous.to_string(),
            current: current.to_string(),
        });
        state.check_failure("log")?;
        let included = state.ancestors(state.tip(previous)?);
        let excluded = state.ancestors(state.tip(current)?);
        let unique: Vec<usize> = included.difference(&excluded).copied().collect();
        // newest first, like git log
        Ok(unique
            .into_iter()
            .rev()
            .map(|id| &state.commits[id])
            .filter(|c| c.parents.len() < 2)
            .map(|c| match attribution {
                AuthorAttribution::Name => c.name.clone(),
                AuthorAttribution::Email => c.email.clone(),
            })
            .collect())
    }

    async fn merge(&self, branch: &str, strategy: &str) -> Result<(), GitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GitCall::Merge {
            branch: branch.to_string(),
            strategy: strategy.to_string(),
        });
        state.check_failure("merge")?;
        let head = state.head.clone().ok_or_else(|| GitError::CommandFailed {
            args: format!("merge {}", branch),
            status: "exit status: 128".to_string(),
            stderr: "fatal: no branch checked out".to_string(),
        })?;
        let ours = state.tip(&head)?;
        let theirs = state.tip(branch)?;
        if state.ancestors(ours).contains(&theirs) {
            return Ok(());
        }
        state.commits.push(FakeCommit {
            name: MERGER.to_string(),
            email: "merger@example.com".to_string(),
            parents: vec![ours, theirs],
        });
        let id = state.commits.len() - 1;
        state.branches.insert(head, id);
        Ok(())
    }

    async fn push(&self, branches: &[String]) -> Result<(), GitError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GitCall::Push(branches.to_vec()));
        state.check_failure("push")
    }
}
