//! Backup engine - main orchestrator for the backup process
//!
//! The engine walks the periods of a `[from, to)` range one after the other.
//! For every period it replaces the period file, then pages through the data
//! service: each page is formatted, appended to the file and removed from the
//! source before the next page is fetched. A period is finished once the
//! service returns an empty page.

use crate::adapters::source::BackupDataService;
use crate::core::export::options::BackupOptions;
use crate::core::export::summary::BackupSummary;
use crate::core::period::PeriodCalculator;
use crate::domain::period::Period;
use crate::domain::{BackupError, Result};
use crate::{log_page_written, log_period_start};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Backup engine
///
/// Generic over the data service, and therefore over the entity type it
/// exports. All run state lives in the returned [`BackupSummary`], so one
/// engine can be used for several consecutive runs. Runs that share a target
/// folder and file name must not overlap.
///
/// # Examples
///
/// ```rust,no_run
/// use entity_backup::adapters::source::BackupDataService;
/// use entity_backup::core::export::{BackupEngine, BackupOptions};
/// use chrono::NaiveDate;
///
/// # async fn example<S: BackupDataService>(service: S) -> entity_backup::domain::Result<()> {
/// let engine = BackupEngine::new(service, BackupOptions::new("/var/backup", "orders"));
///
/// let from = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let summary = engine.run(from, to).await?;
///
/// println!("Wrote {} files", summary.files_written);
/// # Ok(())
/// # }
/// ```
pub struct BackupEngine<S: BackupDataService> {
    service: S,
    options: BackupOptions,
    calculator: PeriodCalculator,
}

impl<S: BackupDataService> BackupEngine<S> {
    /// Create a new backup engine
    pub fn new(service: S, options: BackupOptions) -> Self {
        let calculator = PeriodCalculator::new(options.granularity, options.week_start);
        Self {
            service,
            options,
            calculator,
        }
    }

    /// Options of this engine
    pub fn options(&self) -> &BackupOptions {
        &self.options
    }

    /// Period calculator derived from the options
    pub fn calculator(&self) -> &PeriodCalculator {
        &self.calculator
    }

    /// Data service of this engine
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Consume the engine and return its data service
    pub fn into_service(self) -> S {
        self.service
    }

    /// Run the backup for `[from, to)`
    ///
    /// This is the main entry point. It:
    /// 1. Validates the options and prepares the target folder
    /// 2. For each complete period of the range:
    ///    - Deletes an existing file of the same name
    ///    - Pages through the data service until a page comes back empty
    ///    - Counts the file if it exists afterwards
    /// 3. Returns the summary
    ///
    /// # Errors
    ///
    /// Any data service, formatting or filesystem error aborts the run at the
    /// current period and page. Files of earlier periods stay on disk; the
    /// current period file may hold records already removed from the source.
    pub async fn run(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<BackupSummary> {
        let start_time = Instant::now();
        let mut summary = BackupSummary::new();

        self.options.validate()?;
        self.prepare_target_folder().await?;

        tracing::info!(
            from = %from,
            to = %to,
            granularity = %self.options.granularity,
            page_size = self.options.page_size,
            target_folder = %self.options.target_folder.display(),
            file_name = %self.options.file_name,
            "Starting backup"
        );

        for period in self.calculator.periods(from, to) {
            self.backup_period(&period, &mut summary).await?;
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Back up one page of `[from, to)` into `file_path`
    ///
    /// Fetches at most `page_size` records. An empty page returns 0 without
    /// touching the file. Otherwise every record is formatted into one buffer,
    /// the buffer is appended to `file_path` (created if missing) and the
    /// records are removed from the source.
    ///
    /// # Returns
    ///
    /// The number of records processed.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::PageLimitExceeded`] if a non-empty page comes
    /// back past `max_pages_per_period`, [`BackupError::Stalled`] if the data
    /// service removed none of the written records, and propagates data
    /// service, formatting and I/O errors.
    pub async fn run_page(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        page_index: usize,
        file_path: &Path,
    ) -> Result<usize> {
        let records = self.fetch_page(from, to, page_index).await?;
        if records.is_empty() {
            return Ok(0);
        }

        let period = Period::new(from.date(), to.date());
        let limit = self.options.max_pages_per_period;
        if page_index > limit {
            return Err(BackupError::PageLimitExceeded { period, limit });
        }

        self.write_page(&period, page_index, &records, file_path).await
    }

    async fn backup_period(&self, period: &Period, summary: &mut BackupSummary) -> Result<()> {
        let file_path = self.options.file_path(period);
        log_period_start!(period, file_path.display());

        if fs::try_exists(&file_path).await? {
            tracing::info!(
                path = %file_path.display(),
                "Removing existing backup file before rewriting period"
            );
            fs::remove_file(&file_path).await?;
        }

        let from = period.start.and_time(NaiveTime::MIN);
        let to = period.end.and_time(NaiveTime::MIN);
        let mut page_index = 1;

        loop {
            let processed = self.run_page(from, to, page_index, &file_path).await?;
            if processed == 0 {
                break;
            }

            summary.add_page(processed);
            page_index += 1;
        }

        summary.periods_processed += 1;

        if fs::try_exists(&file_path).await? {
            summary.add_written_file(file_path);
        } else {
            tracing::debug!(period = %period, "No records in period");
        }

        Ok(())
    }

    async fn fetch_page(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        page_index: usize,
    ) -> Result<Vec<S::Entity>> {
        self.service
            .get_data(from, to, self.options.page_size, page_index)
            .await
    }

    async fn write_page(
        &self,
        period: &Period,
        page_index: usize,
        records: &[S::Entity],
        file_path: &Path,
    ) -> Result<usize> {
        let mut buffer = String::new();
        for record in records {
            self.service.format_as_string(record, &mut buffer)?;
        }

        append_to_file(file_path, &buffer).await?;

        let removed = self.service.remove_data(records).await?;
        if removed == 0 {
            return Err(BackupError::Stalled {
                period: *period,
                page: page_index,
            });
        }
        if removed < records.len() {
            tracing::warn!(
                period = %period,
                page = page_index,
                written = records.len(),
                removed,
                "Data service removed fewer records than were written"
            );
        }

        log_page_written!(page_index, records.len(), file_path.display());

        Ok(records.len())
    }

    async fn prepare_target_folder(&self) -> Result<()> {
        let folder = &self.options.target_folder;

        if fs::try_exists(folder).await? {
            return Ok(());
        }

        if !self.options.create_target_folder {
            return Err(BackupError::Configuration(format!(
                "Target folder does not exist: {}",
                folder.display()
            )));
        }

        fs::create_dir_all(folder).await.map_err(|e| {
            BackupError::Io(format!(
                "Failed to create target folder {}: {e}",
                folder.display()
            ))
        })?;
        tracing::info!(path = %folder.display(), "Created target folder");

        Ok(())
    }
}

async fn append_to_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
