//! Append-only attempt log
//!
//! One line per event, formatted as:
//! ```text
//! 2024-05-01 21:14:03.512093 - Received argument: S1PS
//! ```
//! The file is opened and closed for every line, so nothing is held between
//! appends and concurrent invocations interleave whole lines.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Timestamp layout for log lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Somewhere to record what the relay did
pub trait AttemptLog: Send + Sync {
    fn append(&self, message: &str) -> io::Result<()>;
}

/// Render one log line, newline included
pub fn format_line(at: &DateTime<Local>, message: &str) -> String {
    format!("{} - {}\n", at.format(TIMESTAMP_FORMAT), message)
}

/// Log file at a fixed path
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AttemptLog for FileLog {
    fn append(&self, message: &str) -> io::Result<()> {
        let line = format_line(&Local::now(), message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// In-memory log used by tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MemoryLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl AttemptLog for MemoryLog {
    fn append(&self, message: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_format() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 21, 14, 3).unwrap();
        assert_eq!(
            format_line(&at, "Received argument: S1PS"),
            "2024-05-01 21:14:03.000000 - Received argument: S1PS\n"
        );
    }

    #[test]
    fn test_file_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileLog::new(dir.path().join("atx.log"));

        log.append("first").unwrap();
        log.append("second").unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - first"));
        assert!(lines[1].ends_with(" - second"));
    }

    #[test]
    fn test_file_log_keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atx.log");
        std::fs::write(&path, "older entry\n").unwrap();

        FileLog::new(&path).append("newer entry").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("older entry\n"));
        assert!(contents.trim_end().ends_with(" - newer entry"));
    }

    #[test]
    fn test_file_log_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileLog::new(dir.path().join("missing").join("atx.log"));
        assert!(log.append("lost").is_err());
    }
}
