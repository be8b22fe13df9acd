//! Monthly aggregation of tracked time.
//!
//! [`Reporter`] drives the whole pipeline against any [`IssueTracker`]:
//!
//! 1. **User Resolution**: every configured username is resolved once
//! 2. **Issue Discovery**: per project, issues assigned to the tracked users
//!    and updated inside the month
//! 3. **Notes Scan**: per issue, the report subject's time-tracking notes
//!    inside the month are summed
//!
//! The result is a [`MonthlyReport`]; rendering it is the job of
//! [`crate::libs::view::View`].
//!
//! ## Goal
//!
//! ```text
//! Goal hours = business days * 8
//! Ratio      = (whole hours spent / goal hours) * 100
//! ```

use crate::api::{Issue, IssueTracker};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::spent::SpentTime;
use crate::libs::timesheet::time_spent;
use crate::libs::window::MonthWindow;
use crate::msg_debug;
use anyhow::{Context, Result};

/// Working hours expected per business day.
pub const HOURS_PER_BUSINESS_DAY: i64 = 8;

/// Monthly goal derived from the number of business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    business_days: u32,
}

impl Goal {
    /// `business_days` must be at least 1; the CLI enforces it.
    pub fn new(business_days: u32) -> Self {
        Self { business_days }
    }

    pub fn hours(&self) -> i64 {
        i64::from(self.business_days) * HOURS_PER_BUSINESS_DAY
    }

    /// Percentage of the goal reached, counting whole hours only.
    pub fn ratio(&self, total: SpentTime) -> f64 {
        (total.hours() as f64 / self.hours() as f64) * 100.0
    }

    /// Ratio rendered as `"<xx.xx>%"`.
    pub fn format_ratio(&self, total: SpentTime) -> String {
        format!("{:.2}%", self.ratio(total))
    }
}

/// How an issue shows up in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOutcome {
    /// No qualifying note; the issue is not printed.
    NoEntries,
    /// Qualifying notes cancelling out to exactly zero; printed highlighted.
    ZeroTime,
    /// Any other net amount.
    Spent(SpentTime),
}

/// An issue together with the time the subject spent on it.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueTime {
    pub issue: Issue,
    /// `None` when no note qualified.
    pub spent: Option<SpentTime>,
}

impl IssueTime {
    pub fn outcome(&self) -> IssueOutcome {
        match self.spent {
            None => IssueOutcome::NoEntries,
            Some(spent) if spent.is_zero() => IssueOutcome::ZeroTime,
            Some(spent) => IssueOutcome::Spent(spent),
        }
    }

    pub fn spent_or_zero(&self) -> SpentTime {
        self.spent.unwrap_or(SpentTime::ZERO)
    }
}

/// Per-project results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub project_id: u64,
    pub name: String,
    pub issues: Vec<IssueTime>,
}

impl ProjectSummary {
    pub fn total(&self) -> SpentTime {
        self.issues.iter().map(IssueTime::spent_or_zero).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub worker: String,
    pub window: MonthWindow,
    pub projects: Vec<ProjectSummary>,
}

impl MonthlyReport {
    pub fn total(&self) -> SpentTime {
        self.projects.iter().map(ProjectSummary::total).sum()
    }
}

/// Runs the monthly aggregation against an issue tracker.
pub struct Reporter<'a, T: IssueTracker> {
    tracker: &'a T,
    config: &'a Config,
}

impl<'a, T: IssueTracker> Reporter<'a, T> {
    pub fn new(tracker: &'a T, config: &'a Config) -> Self {
        Self { tracker, config }
    }

    /// Resolves every configured username to its user id, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first username that cannot be resolved unambiguously.
    pub async fn assignee_ids(&self) -> Result<Vec<u64>> {
        let mut ids = Vec::with_capacity(self.config.worker_usernames.len());
        for username in &self.config.worker_usernames {
            let user = self
                .tracker
                .find_user(username)
                .await
                .with_context(|| format!("failed to resolve worker '{}'", username))?;
            ids.push(user.id);
        }
        Ok(ids)
    }

    /// Collects `worker`'s time across all configured projects inside `window`.
    ///
    /// Any request or parse failure aborts the whole report.
    pub async fn run(&self, worker: &str, window: MonthWindow) -> Result<MonthlyReport> {
        msg_debug!(Message::ScanningWindow {
            start: window.start(),
            end: window.end(),
        });
        let assignee_ids = self.assignee_ids().await?;

        let mut projects = Vec::with_capacity(self.config.project_ids.len());
        for &project_id in &self.config.project_ids {
            let project = self
                .tracker
                .project(project_id)
                .await
                .with_context(|| format!("failed to fetch project {}", project_id))?;
            let issues = self
                .tracker
                .issues(project_id, &window, &assignee_ids)
                .await
                .with_context(|| format!("failed to fetch issues of project {}", project_id))?;

            let mut results = Vec::with_capacity(issues.len());
            for issue in issues {
                let notes = self
                    .tracker
                    .notes(&issue)
                    .await
                    .with_context(|| format!("failed to fetch notes of {}", issue.web_url))?;
                let spent = time_spent(&notes, worker, &window)
                    .with_context(|| format!("failed to read time tracking notes of {}", issue.web_url))?;
                results.push(IssueTime { issue, spent });
            }

            projects.push(ProjectSummary {
                project_id,
                name: project.name,
                issues: results,
            });
        }

        Ok(MonthlyReport {
            worker: worker.to_string(),
            window,
            projects,
        })
    }
}
