use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    WorkerUsernames(String),
    ProjectIds(Vec<u64>),
    NotesLogEnabled(String),

    // === REPORT MESSAGES ===
    ReportSeparator,
    ProjectHeader(String),
    IssueTimeSpent {
        url: String,
        title: String,
        spent: String,
    },
    IssueZeroTime {
        title: String,
        spent: String,
    },
    IssueZeroTimeUrl(String),
    MonthlyTotal {
        worker: String,
        year: i32,
        month: u32,
        spent: String,
    },
    Ratio(String),

    // === GITLAB MESSAGES ===
    ResolvingUser(String),
    UserResolved {
        username: String,
        id: u64,
    },
    FetchingProject(u64),
    FetchingIssuesPage {
        project_id: u64,
        page: u32,
    },
    IssuesFetched {
        project_id: u64,
        count: usize,
    },
    FetchingNotesPage {
        project_id: u64,
        iid: u64,
        page: u32,
    },
    NotesFetched {
        iid: u64,
        count: usize,
    },
    ScanningWindow {
        start: NaiveDate,
        end: NaiveDate,
    },

    // === NOTES LOG MESSAGES ===
    NotesLogRotated(String),
    NotesLogWriteFailed(String),
}
