// Append-only CSV log of completed interactions.

use crate::error::HistoryError;
use chrono::Local;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One row of the log. Field names double as the CSV header.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub coin: String,
    pub question_number: usize,
    pub summary: String,
}

/// Current local time, ISO-8601 with second precision.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[derive(Debug, Clone)]
pub struct InteractionLog {
    path: PathBuf,
}

impl InteractionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InteractionLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record`, writing the header first if the file is new.
    /// The file is opened and closed within this call.
    pub fn append(&self, record: &LogRecord) -> Result<(), HistoryError> {
        let is_new = !self.path.try_exists()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(path = %self.path.display(), is_new, "interaction logged");
        Ok(())
    }

    pub fn log_interaction(
        &self,
        timestamp: &str,
        coin: &str,
        question_number: usize,
        answer: &str,
    ) -> Result<(), HistoryError> {
        self.append(&LogRecord {
            date: timestamp.to_string(),
            coin: coin.to_string(),
            question_number,
            summary: answer.to_string(),
        })
    }
}
