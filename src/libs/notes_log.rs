//! Size-bounded log of raw GitLab notes responses.
//!
//! When enabled, every notes page returned by GitLab is appended to the log
//! as one line of JSON. Once the file would grow past its size limit it is
//! moved aside to `<path>.1` (replacing an older rotation) and a fresh file
//! is started, so at most two files of roughly `max_bytes` each exist.
//!
//! The log is a diagnostic aid only: write failures are reported as
//! warnings and never abort a report.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default rotation threshold, 1 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Location and size limit of the notes log.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesLogConfig {
    pub path: PathBuf,
    pub max_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct NotesLog {
    path: PathBuf,
    max_bytes: u64,
}

impl NotesLog {
    pub fn new(config: &NotesLogConfig) -> Self {
        Self {
            path: config.path.clone(),
            max_bytes: config.max_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the log is rotated to.
    pub fn rotated_path(&self) -> PathBuf {
        let mut rotated = self.path.clone().into_os_string();
        rotated.push(".1");
        PathBuf::from(rotated)
    }

    /// Appends `raw` as a single line, warning instead of failing on I/O errors.
    pub fn record(&self, raw: &str) {
        if let Err(e) = self.append(raw) {
            msg_warning!(Message::NotesLogWriteFailed(e.to_string()));
        }
    }

    /// Appends `raw` as a single line, rotating the file first when needed.
    pub fn append(&self, raw: &str) -> io::Result<()> {
        let line = format!("{}\n", raw.replace(['\r', '\n'], " "));
        self.rotate_if_needed(line.len() as u64)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn rotate_if_needed(&self, incoming: u64) -> io::Result<()> {
        let current = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };
        if current == 0 || current + incoming <= self.max_bytes {
            return Ok(());
        }

        let rotated = self.rotated_path();
        if rotated.exists() {
            fs::remove_file(&rotated)?;
        }
        fs::rename(&self.path, &rotated)?;
        msg_debug!(Message::NotesLogRotated(rotated.display().to_string()));
        Ok(())
    }
}
