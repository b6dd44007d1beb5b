//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "entity-backup.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing entity-backup configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: entity-backup validate-config");
                println!(
                    "  3. Preview periods: entity-backup plan --from 2024-01-01 --to 2024-02-01"
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with comments
    pub fn sample_config() -> &'static str {
        r#"# entity-backup configuration file

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[backup]
# Length of the period stored in one file (daily, weekly, monthly, yearly)
granularity = "daily"

# Records fetched, written and removed per page
page_size = 50

# Folder the backup files are written to
target_folder = "./backup"

# Base name of the backup files, e.g. orders_20240101.csv
file_name = "orders"

# First day of the week for weekly backups (sunday, monday)
week_start = "sunday"

# Abort a period that needs more pages than this
max_pages_per_period = 10000

# Create target_folder when it does not exist
create_target_folder = true

[logging]
# JSON log files in local_path
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#
    }
}
