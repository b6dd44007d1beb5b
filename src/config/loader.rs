//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BackupConfig;
use crate::domain::errors::BackupError;
use crate::domain::period::{Granularity, WeekStart};
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "ENTITY_BACKUP_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BackupConfig
/// 4. Applies environment variable overrides (ENTITY_BACKUP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - An override holds an invalid value
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use entity_backup::config::loader::load_config;
///
/// let config = load_config("entity-backup.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BackupConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BackupError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BackupError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: BackupConfig = toml::from_str(&contents)
        .map_err(|e| BackupError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BackupError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged. Every missing variable is reported in
/// one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BackupError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BackupError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        BackupError::Configuration(format!(
            "Invalid value '{value}' for environment variable {ENV_PREFIX}{key}"
        ))
    })
}

/// Applies environment variable overrides using ENTITY_BACKUP_* prefix
///
/// Environment variables follow the pattern: ENTITY_BACKUP_<SECTION>_<KEY>
/// For example: ENTITY_BACKUP_BACKUP_PAGE_SIZE, ENTITY_BACKUP_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut BackupConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Backup overrides
    if let Some(val) = env_override("BACKUP_GRANULARITY") {
        config.backup.granularity = Granularity::from_str(&val)?;
    }
    if let Some(val) = env_override("BACKUP_PAGE_SIZE") {
        config.backup.page_size = parse_override("BACKUP_PAGE_SIZE", &val)?;
    }
    if let Some(val) = env_override("BACKUP_TARGET_FOLDER") {
        config.backup.target_folder = val;
    }
    if let Some(val) = env_override("BACKUP_FILE_NAME") {
        config.backup.file_name = val;
    }
    if let Some(val) = env_override("BACKUP_WEEK_START") {
        config.backup.week_start = WeekStart::from_str(&val)?;
    }
    if let Some(val) = env_override("BACKUP_MAX_PAGES_PER_PERIOD") {
        config.backup.max_pages_per_period =
            parse_override("BACKUP_MAX_PAGES_PER_PERIOD", &val)?;
    }
    if let Some(val) = env_override("BACKUP_CREATE_TARGET_FOLDER") {
        config.backup.create_target_folder =
            parse_override("BACKUP_CREATE_TARGET_FOLDER", &val)?;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LOADER_TEST_FOLDER", "/srv/backup");
        let input = "target_folder = \"${LOADER_TEST_FOLDER}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result.trim_end(), "target_folder = \"/srv/backup\"");
        std::env::remove_var("LOADER_TEST_FOLDER");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LOADER_MISSING_VAR");
        let input = "file_name = \"${LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("LOADER_COMMENTED_VAR");
        let input = "# file_name = \"${LOADER_COMMENTED_VAR}\"\nfile_name = \"orders\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_parse_override_invalid() {
        let result: Result<usize> = parse_override("BACKUP_PAGE_SIZE", "fifty");
        assert!(matches!(result, Err(BackupError::Configuration(_))));
    }

    #[test]
    fn test_parse_override_bool() {
        assert!(!parse_override::<bool>("BACKUP_CREATE_TARGET_FOLDER", "false").unwrap());
        assert!(parse_override::<bool>("LOGGING_LOCAL_ENABLED", " true ").unwrap());
        assert!(parse_override::<bool>("BACKUP_CREATE_TARGET_FOLDER", "no").is_err());
        assert!(parse_override::<bool>("BACKUP_CREATE_TARGET_FOLDER", "False").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[backup]
granularity = "monthly"
page_size = 200
target_folder = "/srv/backup"
file_name = "invoices"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.backup.granularity, Granularity::Monthly);
        assert_eq!(config.backup.page_size, 200);
        assert_eq!(config.backup.file_name, "invoices");
    }
}
