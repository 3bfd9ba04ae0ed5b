//! `git` CLI implementation of [`GitOps`]

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::{AuthorAttribution, GitError, GitOps};

/// Runs git subprocesses in a working copy, one at a time
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
    remote: String,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        let repo = repo.into();
        let remote = remote.into();
        debug!(?repo, %remote, "GitCli::new: called");
        Self { repo, remote }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Run git and return stdout; non-zero exit is an error
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let joined = args.join(" ");
        info!("[command] git {}", joined);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                args: joined.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(args = %joined, %stderr, "GitCli::run: command failed");
            return Err(GitError::CommandFailed {
                args: joined,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whether the working copy has truncated history
    pub async fn is_shallow(&self) -> Result<bool, GitError> {
        let out = self.run(&["rev-parse", "--is-shallow-repository"]).await?;
        Ok(out.trim() == "true")
    }
}

#[async_trait]
impl GitOps for GitCli {
    async fn fetch(&self, branch: &str, deepen: bool) -> Result<(), GitError> {
        debug!(%branch, deepen, "GitCli::fetch: called");
        // --unshallow is rejected by git on a complete repository
        if deepen && self.is_shallow().await? {
            self.run(&["fetch", self.remote.as_str(), branch, "--unshallow"]).await?;
        } else {
            self.run(&["fetch", self.remote.as_str(), branch]).await?;
        }
        Ok(())
    }

    async fn switch_to(&self, branch: &str) -> Result<(), GitError> {
        self.run(&["switch", branch]).await?;
        Ok(())
    }

    async fn log_authors(
        &self,
        previous: &str,
        current: &str,
        attribution: AuthorAttribution,
    ) -> Result<Vec<String>, GitError> {
        let exclude = format!("^{}", current);
        let format = format!("--format={}", attribution.log_format());
        let out = self
            .run(&["log", previous, exclude.as_str(), format.as_str(), "--no-merges"])
            .await?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    async fn merge(&self, branch: &str, strategy: &str) -> Result<(), GitError> {
        self.run(&["merge", branch, "-s", strategy, "--no-edit"]).await?;
        Ok(())
    }

    async fn push(&self, branches: &[String]) -> Result<(), GitError> {
        let mut args = vec!["push", "--atomic", self.remote.as_str()];
        args.extend(branches.iter().map(String::as_str));
        self.run(&args).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    async fn setup_git_repo(dir: &Path) {
        for args in [
            vec!["init"],
            vec!["config", "user.email", "test@test.com"],
            vec!["config", "user.name", "Test"],
            vec!["config", "commit.gpgsign", "false"],
            vec!["commit", "--allow-empty", "-m", "initial"],
        ] {
            Command::new("git").args(&args).current_dir(dir).output().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_log_authors_by_name_and_email() {
        let dir = tempdir().unwrap();
        setup_git_repo(dir.path()).await;
        let git = GitCli::new(dir.path(), "origin");

        git.run(&["branch", "base"]).await.unwrap();
        git.run(&["commit", "--allow-empty", "-m", "second"]).await.unwrap();

        let names = git.log_authors("HEAD", "base", AuthorAttribution::Name).await.unwrap();
        assert_eq!(names, vec!["Test"]);

        let emails = git.log_authors("HEAD", "base", AuthorAttribution::Email).await.unwrap();
        assert_eq!(emails, vec!["test@test.com"]);

        let none = git.log_authors("base", "HEAD", AuthorAttribution::Name).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_failed_command_is_error() {
        let dir = tempdir().unwrap();
        setup_git_repo(dir.path()).await;
        let git = GitCli::new(dir.path(), "origin");

        let err = git.switch_to("does-not-exist").await.unwrap_err();
        assert!(matches!(err, GitError::CommandFailed { .. }));
        assert!(err.to_string().contains("switch does-not-exist"));
    }

    #[tokio::test]
    async fn test_fresh_repo_is_not_shallow() {
        let dir = tempdir().unwrap();
        setup_git_repo(dir.path()).await;
        let git = GitCli::new(dir.path(), "origin");
        assert!(!git.is_shallow().await.unwrap());
    }
}
