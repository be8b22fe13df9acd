//! Time a worker spent on one issue during a month.

use crate::api::Note;
use crate::libs::spent::{is_time_tracking, parse_note_body, ParseError, SpentTime};
use crate::libs::window::MonthWindow;

/// Returns `true` when `note` counts towards `worker`'s time inside `window`.
pub fn is_qualifying(note: &Note, worker: &str, window: &MonthWindow) -> bool {
    window.contains(note.updated_at.date_naive()) && note.author.username == worker && is_time_tracking(&note.body)
}

/// Sums the time-tracking notes `worker` left inside `window`.
///
/// Returns `Ok(None)` when no note qualified, otherwise the net total, which
/// may be zero or negative. Each note is parsed on its own, starting in add
/// mode.
pub fn time_spent(notes: &[Note], worker: &str, window: &MonthWindow) -> Result<Option<SpentTime>, ParseError> {
    let mut total: Option<SpentTime> = None;

    for note in notes.iter().filter(|note| is_qualifying(note, worker, window)) {
        let spent = parse_note_body(&note.body)?;
        *total.get_or_insert(SpentTime::ZERO) += spent;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gitlab::NoteAuthor;
    use chrono::{TimeZone, Utc};

    fn note(author: &str, body: &str, (y, m, d): (i32, u32, u32)) -> Note {
        Note {
            id: 1,
            body: body.to_string(),
            author: NoteAuthor {
                username: author.to_string(),
            },
            updated_at: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            system: true,
        }
    }

    fn august() -> MonthWindow {
        MonthWindow::new(2024, 8).unwrap()
    }

    #[test]
    fn test_sums_notes_of_worker() {
        let notes = vec![
            note("jdoe", "added 2h 30m of time spent", (2024, 8, 2)),
            note("jdoe", "added 1h of time spent", (2024, 8, 20)),
        ];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), Some(SpentTime::from_minutes(210)));
    }

    #[test]
    fn test_notes_outside_window_are_ignored() {
        let notes = vec![
            note("jdoe", "added 2h of time spent", (2024, 7, 31)),
            note("jdoe", "added 2h of time spent", (2024, 9, 1)),
        ];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), None);
    }

    #[test]
    fn test_notes_of_other_authors_are_ignored() {
        let notes = vec![note("someone", "added 2h of time spent", (2024, 8, 2))];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), None);
    }

    #[test]
    fn test_notes_without_marker_are_ignored() {
        let notes = vec![note("jdoe", "added 2h", (2024, 8, 2))];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), None);
    }

    #[test]
    fn test_qualifying_notes_can_cancel_out() {
        let notes = vec![
            note("jdoe", "added 1h of time spent", (2024, 8, 2)),
            note("jdoe", "subtracted 1h of time spent", (2024, 8, 3)),
        ];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), Some(SpentTime::ZERO));
    }

    #[test]
    fn test_each_note_starts_in_add_mode() {
        let notes = vec![
            note("jdoe", "subtracted 1h of time spent", (2024, 8, 2)),
            note("jdoe", "3h of time spent", (2024, 8, 3)),
        ];
        assert_eq!(time_spent(&notes, "jdoe", &august()).unwrap(), Some(SpentTime::from_hours(2)));
    }

    #[test]
    fn test_parse_error_is_propagated() {
        let notes = vec![note("jdoe", "added 1.5h of time spent", (2024, 8, 2))];
        assert!(time_spent(&notes, "jdoe", &august()).is_err());
    }
}
