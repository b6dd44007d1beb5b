//! Backup run options
//!
//! [`BackupOptions`] holds everything one [`BackupEngine`](super::BackupEngine)
//! needs besides its data service: granularity, page size and where the
//! period files go.

use crate::config::schema::BackupSection;
use crate::domain::period::{Granularity, Period, WeekStart};
use crate::domain::{BackupError, Result};
use std::path::PathBuf;

/// Default number of records fetched per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Default bound on the pages written for one period
///
/// Stops a data service that reports removals it did not make from
/// re-serving the same page forever.
pub const DEFAULT_MAX_PAGES_PER_PERIOD: usize = 10_000;

/// Extension of every backup file
pub const FILE_EXTENSION: &str = "csv";

/// Options for a backup engine
///
/// # Examples
///
/// ```
/// use entity_backup::core::export::BackupOptions;
/// use entity_backup::domain::Granularity;
///
/// let options = BackupOptions::new("/var/backup", "orders")
///     .with_granularity(Granularity::Monthly)
///     .with_page_size(500);
///
/// assert_eq!(options.page_size, 500);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOptions {
    /// Period length of one output file
    pub granularity: Granularity,

    /// Maximum number of records fetched per page
    pub page_size: usize,

    /// Folder the backup files are written to
    pub target_folder: PathBuf,

    /// Base name of the backup files; period dates are appended
    pub file_name: String,

    /// First day of the week for weekly periods
    pub week_start: WeekStart,

    /// Abort a period that needs more pages than this
    pub max_pages_per_period: usize,

    /// Create the target folder when it does not exist
    pub create_target_folder: bool,
}

impl BackupOptions {
    /// Create options with daily granularity and the default page size
    pub fn new(target_folder: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            granularity: Granularity::default(),
            page_size: DEFAULT_PAGE_SIZE,
            target_folder: target_folder.into(),
            file_name: file_name.into(),
            week_start: WeekStart::default(),
            max_pages_per_period: DEFAULT_MAX_PAGES_PER_PERIOD,
            create_target_folder: true,
        }
    }

    /// Build options from the `[backup]` configuration section
    pub fn from_config(section: &BackupSection) -> Self {
        Self {
            granularity: section.granularity,
            page_size: section.page_size,
            target_folder: PathBuf::from(&section.target_folder),
            file_name: section.file_name.clone(),
            week_start: section.week_start,
            max_pages_per_period: section.max_pages_per_period,
            create_target_folder: section.create_target_folder,
        }
    }

    /// Set the granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the first day of the week
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Limit the number of pages per period
    pub fn with_max_pages_per_period(mut self, limit: usize) -> Self {
        self.max_pages_per_period = limit;
        self
    }

    /// Whether to create a missing target folder
    pub fn with_create_target_folder(mut self, create: bool) -> Self {
        self.create_target_folder = create;
        self
    }

    /// Validates the options
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Configuration`] if the page size or page limit
    /// is zero, or if the file name is empty or contains a path separator.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BackupError::Configuration(
                "page_size must be greater than 0".to_string(),
            ));
        }

        if self.max_pages_per_period == 0 {
            return Err(BackupError::Configuration(
                "max_pages_per_period must be greater than 0".to_string(),
            ));
        }

        if self.file_name.trim().is_empty() {
            return Err(BackupError::Configuration(
                "file_name cannot be empty".to_string(),
            ));
        }

        if self.file_name.contains(['/', '\\']) {
            return Err(BackupError::Configuration(format!(
                "file_name '{}' must not contain path separators",
                self.file_name
            )));
        }

        Ok(())
    }

    /// Output file name for `period`, without the folder
    ///
    /// Daily files carry the start date only (`orders_20230719.csv`); all
    /// other granularities carry both bounds (`orders_20230701-20230801.csv`).
    pub fn file_name_for(&self, period: &Period) -> String {
        match self.granularity {
            Granularity::Daily => format!(
                "{}_{}.{}",
                self.file_name,
                period.start.format("%Y%m%d"),
                FILE_EXTENSION
            ),
            _ => format!(
                "{}_{}-{}.{}",
                self.file_name,
                period.start.format("%Y%m%d"),
                period.end.format("%Y%m%d"),
                FILE_EXTENSION
            ),
        }
    }

    /// Full output path for `period`
    pub fn file_path(&self, period: &Period) -> PathBuf {
        self.target_folder.join(self.file_name_for(period))
    }

    /// Whether `name` looks like a backup file written with these options
    pub fn is_backup_file_name(&self, name: &str) -> bool {
        let Some(stem) = name
            .strip_prefix(self.file_name.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(FILE_EXTENSION))
            .and_then(|rest| rest.strip_suffix('.'))
        else {
            return false;
        };

        let is_date = |s: &str| s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit());
        match stem.split_once('-') {
            Some((start, end)) => is_date(start) && is_date(end),
            None => is_date(stem),
        }
    }
}
