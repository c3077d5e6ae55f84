//! Transcript Logger
//!
//! Append-only record of the whole session: one line per user command
//! (prefixed `>`) and one line per emitted output line, each stamped with
//! local time. The file is opened per write and never truncated.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Timestamp format used on every transcript line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends timestamped lines to the transcript file.
#[derive(Clone, Debug)]
pub struct TranscriptLogger {
    path: PathBuf,
}

impl TranscriptLogger {
    /// Logger appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The transcript file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a user command as `[ts] > <command>`.
    pub fn log_command(&self, command: &str) -> io::Result<()> {
        self.append(&format!("> {command}"))
    }

    /// Record one output line as `[ts] <line>`.
    pub fn log_output(&self, line: &str) -> io::Result<()> {
        self.append(line)
    }

    fn append(&self, text: &str) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{timestamp}] {text}")
    }
}

// =============================================================================
// TESTS
// =============================================================================
