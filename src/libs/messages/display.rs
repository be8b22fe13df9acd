//! Display implementation for glspent application messages.
//!
//! All user-facing text lives here, so the report layout and the progress
//! messages can be changed in one place. Report lines keep the exact layout
//! operators already grep for (`url: ... | Issue:...  | time spent: ...`).

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

/// Separator line framing projects and the final summary.
const SEPARATOR: &str = "-------------------------------------------------";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::WorkerUsernames(usernames) => format!("WORKER_USERNAME: {}", usernames),
            Message::ProjectIds(ids) => format!("PROJECT_ID: {:?}", ids),
            Message::NotesLogEnabled(path) => format!("Raw notes responses are logged to {}", path),

            // === REPORT MESSAGES ===
            Message::ReportSeparator => SEPARATOR.to_string(),
            Message::ProjectHeader(name) => format!("Project: {}", name),
            Message::IssueTimeSpent { url, title, spent } => {
                format!("url: {} | Issue:{}  | time spent: {}", url, title, spent)
            }
            Message::IssueZeroTime { title, spent } => format!("    Issue:{}  | time spent: {}", title, spent),
            Message::IssueZeroTimeUrl(url) => format!("    '-------> {}", url),
            Message::MonthlyTotal { worker, year, month, spent } => {
                format!("Total time spent by {} on all tickets in {}-{}: {}", worker, year, month, spent)
            }
            Message::Ratio(ratio) => format!("Ratio: {}", ratio),

            // === GITLAB MESSAGES ===
            Message::ResolvingUser(username) => format!("Resolving GitLab user '{}'", username),
            Message::UserResolved { username, id } => format!("GitLab user '{}' has id {}", username, id),
            Message::FetchingProject(id) => format!("Fetching project {}", id),
            Message::FetchingIssuesPage { project_id, page } => {
                format!("Fetching issues of project {} (page {})", project_id, page)
            }
            Message::IssuesFetched { project_id, count } => format!("Project {} has {} matching issue(s)", project_id, count),
            Message::FetchingNotesPage { project_id, iid, page } => {
                format!("Fetching notes of issue {}#{} (page {})", project_id, iid, page)
            }
            Message::NotesFetched { iid, count } => format!("Issue #{} has {} note(s)", iid, count),
            Message::ScanningWindow { start, end } => format!("Scanning notes updated in [{}, {})", start, end),

            // === NOTES LOG MESSAGES ===
            Message::NotesLogRotated(path) => format!("Notes log rotated to {}", path),
            Message::NotesLogWriteFailed(error) => format!("Failed to write notes log: {}", error),
        };
        write!(f, "{}", text)
    }
}
