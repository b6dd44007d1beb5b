//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the entity-backup configuration file.

use crate::config::load_config;
use crate::core::export::BackupOptions;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Err(e) = BackupOptions::from_config(&config.backup).validate() {
            println!("❌ Backup options are invalid");
            println!("   Error: {e}");
            return Ok(2);
        }

        let backup = &config.backup;
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Granularity: {}", backup.granularity);
        println!("  Week Start: {}", backup.week_start);
        println!("  Page Size: {}", backup.page_size);
        println!("  Target Folder: {}", backup.target_folder);
        println!("  File Name: {}", backup.file_name);
        println!("  Max Pages per Period: {}", backup.max_pages_per_period);
        println!("  Create Target Folder: {}", backup.create_target_folder);
        println!(
            "  Local Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
