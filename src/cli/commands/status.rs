//! Status command implementation
//!
//! This module implements the `status` command, which lists the backup files
//! already present in the configured target folder.

use crate::adapters::source::DEFAULT_DELIMITER;
use crate::config::load_config;
use crate::core::export::BackupOptions;
use crate::domain::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the file list as JSON
    #[arg(long)]
    pub json: bool,
}

/// One backup file found in the target folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupFileStatus {
    /// File name without the folder
    pub file_name: String,

    /// Number of records; a quoted field may span several lines
    pub records: usize,

    /// File size in bytes
    pub size_bytes: u64,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking backup status");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        let options = BackupOptions::from_config(&config.backup);
        let files = match list_backup_files(&options).await {
            Ok(f) => f,
            Err(e) => {
                println!("❌ Failed to read target folder");
                println!("   Error: {}", e);
                return Ok(5); // Fatal error exit code
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&files)?);
            return Ok(0);
        }

        println!("📊 Backup Status");
        println!();
        println!("Target folder: {}", options.target_folder.display());
        println!();

        if files.is_empty() {
            println!("No backup files found for '{}'.", options.file_name);
            return Ok(0);
        }

        let total: usize = files.iter().map(|f| f.records).sum();
        for file in &files {
            println!("  {:<40} {:>10} records", file.file_name, file.records);
        }
        println!();
        println!("Total: {} files, {} records", files.len(), total);

        Ok(0)
    }
}

/// Backup files of `options` in its target folder, sorted by name
///
/// A missing folder yields an empty list.
pub async fn list_backup_files(options: &BackupOptions) -> Result<Vec<BackupFileStatus>> {
    let folder = options.target_folder.as_path();
    if !tokio::fs::try_exists(folder).await? {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(folder).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if !options.is_backup_file_name(&name) || !entry.file_type().await?.is_file() {
            continue;
        }
        files.push(file_status(&entry.path(), name).await?);
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

async fn file_status(path: &Path, file_name: String) -> Result<BackupFileStatus> {
    let contents = tokio::fs::read(path).await?;

    Ok(BackupFileStatus {
        file_name,
        records: count_records(&contents)?,
        size_bytes: contents.len() as u64,
    })
}

/// Number of delimited records in `contents`
fn count_records(contents: &[u8]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DEFAULT_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(contents);

    let mut count = 0;
    for record in reader.byte_records() {
        record?;
        count += 1;
    }
    Ok(count)
}
