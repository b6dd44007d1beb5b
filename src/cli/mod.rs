//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for entity-backup using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// entity-backup - periodic entity backup files
#[derive(Parser, Debug)]
#[command(name = "entity-backup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "entity-backup.toml",
        env = "ENTITY_BACKUP_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENTITY_BACKUP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show the periods and file names a backup of a range would produce
    Plan(commands::plan::PlanArgs),

    /// List existing backup files
    Status(commands::status::StatusArgs),
}
