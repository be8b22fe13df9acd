//! API client modules for the issue tracker glspent reports on.
//!
//! [`IssueTracker`] is the seam between the report pipeline and the remote
//! service: the production implementation is [`gitlab::GitLab`], tests plug
//! in an in-memory tracker.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glspent::api::{GitLab, GitLabConfig, IssueTracker};
//!
//! # async fn run(config: GitLabConfig) -> anyhow::Result<()> {
//! let gitlab = GitLab::new(&config)?;
//! let project = gitlab.project(42).await?;
//! println!("{}", project.name);
//! # Ok(())
//! # }
//! ```

use crate::libs::window::MonthWindow;
use anyhow::Result;

pub mod gitlab;

pub use gitlab::{GitLab, GitLabConfig, Issue, Note, Project, User};

/// Read-only operations the report needs from an issue tracker.
///
/// Callers issue one request at a time; implementations are not required to
/// be `Send` or `Sync`.
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Resolves an exact username to a single user.
    ///
    /// # Errors
    ///
    /// Fails when the lookup request fails, or when the username matches no
    /// user or several users.
    async fn find_user(&self, username: &str) -> Result<User>;

    /// Fetches project details for report headers.
    async fn project(&self, project_id: u64) -> Result<Project>;

    /// Fetches every issue of `project_id` assigned to any of `assignee_ids`
    /// and updated inside `window`.
    async fn issues(&self, project_id: u64, window: &MonthWindow, assignee_ids: &[u64]) -> Result<Vec<Issue>>;

    /// Fetches every note of `issue`.
    async fn notes(&self, issue: &Issue) -> Result<Vec<Note>>;
}
