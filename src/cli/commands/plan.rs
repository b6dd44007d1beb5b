//! Plan command implementation
//!
//! This module implements the `plan` command, which prints the periods and
//! output files a backup of a range would produce without touching any data.

use crate::config::load_config;
use crate::core::export::BackupOptions;
use crate::core::period::PeriodCalculator;
use crate::domain::{BackupError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Inclusive start of the range (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub from: String,

    /// Exclusive end of the range (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub to: String,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (from, to) = match (parse_instant(&self.from), parse_instant(&self.to)) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(e), _) | (_, Err(e)) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let options = BackupOptions::from_config(&config.backup);
        let rows = plan_rows(&options, from, to);

        tracing::info!(
            from = %from,
            to = %to,
            granularity = %options.granularity,
            periods = rows.len(),
            "Planned backup"
        );

        println!(
            "📅 Backup plan for {from} .. {to} ({} periods)",
            options.granularity
        );
        println!();

        if rows.is_empty() {
            println!("No complete period in range.");
            return Ok(0);
        }

        for (period, path) in &rows {
            println!("  {period}  ->  {path}");
        }
        println!();

        Ok(0)
    }
}

/// Every period of `[from, to)` together with the path of its output file
pub fn plan_rows(
    options: &BackupOptions,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Vec<(String, String)> {
    PeriodCalculator::new(options.granularity, options.week_start)
        .periods(from, to)
        .map(|period| {
            (
                period.to_string(),
                options.file_path(&period).display().to_string(),
            )
        })
        .collect()
}

/// Parse a date (midnight) or a date-time without zone
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            BackupError::Configuration(format!(
                "Invalid date '{value}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"
            ))
        })
}
