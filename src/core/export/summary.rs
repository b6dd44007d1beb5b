//! Backup summary and reporting
//!
//! This module defines the result value returned by a backup run.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of one backup run
#[derive(Debug, Clone, Serialize)]
pub struct BackupSummary {
    /// Number of period files that exist after their period was processed
    pub files_written: usize,

    /// Total number of records written and removed
    pub records_exported: usize,

    /// Number of periods visited, including empty ones
    pub periods_processed: usize,

    /// Number of non-empty pages written
    pub pages_processed: usize,

    /// Paths of the files counted in `files_written`, in period order
    pub written_files: Vec<PathBuf>,

    /// Duration of the run
    pub duration: Duration,
}

impl BackupSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            files_written: 0,
            records_exported: 0,
            periods_processed: 0,
            pages_processed: 0,
            written_files: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a written file
    pub fn add_written_file(&mut self, path: PathBuf) {
        self.files_written += 1;
        self.written_files.push(path);
    }

    /// Record one written page of `records` records
    pub fn add_page(&mut self, records: usize) {
        self.pages_processed += 1;
        self.records_exported += records;
    }

    /// Whether the run exported anything
    pub fn is_empty(&self) -> bool {
        self.records_exported == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            files_written = self.files_written,
            records_exported = self.records_exported,
            periods_processed = self.periods_processed,
            pages_processed = self.pages_processed,
            duration_ms = self.duration.as_millis() as u64,
            "Backup completed"
        );
    }
}

impl Default for BackupSummary {
    fn default() -> Self {
        Self::new()
    }
}
