use super::messages::Message;
use super::report::{Goal, IssueOutcome, IssueTime, MonthlyReport, ProjectSummary};
use super::spent::SpentTime;
use colored::Colorize;
use std::io::{self, Write};

/// Line-oriented console rendering of a [`MonthlyReport`].
pub struct View {}

impl View {
    /// Writes the whole report: project sections, the monthly total and the
    /// ratio against `goal`.
    pub fn report<W: Write>(out: &mut W, report: &MonthlyReport, goal: &Goal) -> io::Result<()> {
        for project in &report.projects {
            Self::project(out, project)?;
        }
        Self::summary(out, report, goal)
    }

    pub fn project<W: Write>(out: &mut W, project: &ProjectSummary) -> io::Result<()> {
        writeln!(out, "{}", Message::ReportSeparator)?;
        writeln!(out, "{}", Message::ProjectHeader(project.name.clone()))?;
        for issue in &project.issues {
            Self::issue(out, issue)?;
        }
        Ok(())
    }

    /// Issues without qualifying notes print nothing; a zero total prints a
    /// highlighted two-line warning.
    pub fn issue<W: Write>(out: &mut W, issue: &IssueTime) -> io::Result<()> {
        match issue.outcome() {
            IssueOutcome::NoEntries => Ok(()),
            IssueOutcome::ZeroTime => {
                let title = Message::IssueZeroTime {
                    title: issue.issue.title.clone(),
                    spent: SpentTime::ZERO.to_string(),
                };
                writeln!(out, "{}", title.to_string().bright_red())?;
                writeln!(out, "{}", Message::IssueZeroTimeUrl(issue.issue.web_url.clone()).to_string().bright_red())
            }
            IssueOutcome::Spent(spent) => writeln!(
                out,
                "{}",
                Message::IssueTimeSpent {
                    url: issue.issue.web_url.clone(),
                    title: issue.issue.title.clone(),
                    spent: spent.to_string(),
                }
            ),
        }
    }

    fn summary<W: Write>(out: &mut W, report: &MonthlyReport, goal: &Goal) -> io::Result<()> {
        let total = report.total();
        writeln!(out, "{}", Message::ReportSeparator)?;
        writeln!(
            out,
            "{}",
            Message::MonthlyTotal {
                worker: report.worker.clone(),
                year: report.window.year(),
                month: report.window.month(),
                spent: total.to_string(),
            }
        )?;
        writeln!(out, "{}", Message::Ratio(goal.format_ratio(total)))?;
        writeln!(out, "{}", Message::ReportSeparator)
    }
}
