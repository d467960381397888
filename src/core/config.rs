//! # Configuration
//!
//! Ambient settings for the binary, with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rupee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The rate table is compiled in and is not configurable.
//!
//! Config is read before the logger exists (the log file is itself a
//! setting), so anything worth logging along the way is collected in
//! `StartupNotes` and replayed once logging is up.

use log::Level;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RupeeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationConfig {
    pub duration_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "rupee.log";
pub const DEFAULT_NOTIFICATION_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: String,
    pub log_file: PathBuf,
    pub notification_ms: u64,
}

// ============================================================================
// Startup Notes
// ============================================================================

/// Log records raised while loading and resolving config.
#[derive(Debug, Default)]
pub struct StartupNotes {
    entries: Vec<(Level, String)>,
}

impl StartupNotes {
    fn push(&mut self, level: Level, message: String) {
        self.entries.push((level, message));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Sends every buffered record through the `log` facade, oldest first.
    pub fn flush(self) {
        for (level, message) in self.entries {
            log::log!(level, "{message}");
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.rupee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rupee").join("config.toml"))
}

/// Load config from `~/.rupee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RupeeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut StartupNotes) -> Result<RupeeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.push(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            return Ok(RupeeConfig::default());
        }
    };
    load_config_from(&path, notes)
}

pub fn load_config_from(path: &Path, notes: &mut StartupNotes) -> Result<RupeeConfig, ConfigError> {
    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notes);
        return Ok(RupeeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RupeeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut StartupNotes) {
    let default_content = r#"# Rupee Converter Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "rupee.log"             # Or set RUPEE_LOG_FILE env var

# [notifications]
# duration_ms = 2000                 # How long a message stays on screen
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` comes from the `--log-level` flag (None = not specified).
pub fn resolve(
    config: &RupeeConfig,
    cli_log_level: Option<&str>,
    notes: &mut StartupNotes,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("RUPEE_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("RUPEE_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Notification duration: env → config → default
    let notification_ms =
        parse_notification_ms(std::env::var("RUPEE_NOTIFICATION_MS").ok(), notes)
            .or(config.notifications.duration_ms)
            .unwrap_or(DEFAULT_NOTIFICATION_MS);

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        notification_ms,
    }
}

/// Parses the raw `RUPEE_NOTIFICATION_MS` value, noting and dropping garbage.
fn parse_notification_ms(raw: Option<String>, notes: &mut StartupNotes) -> Option<u64> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            notes.push(
                Level::Warn,
                format!("Ignoring RUPEE_NOTIFICATION_MS={raw:?}: {e}"),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = RupeeConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.notifications.duration_ms.is_none());
    }

    #[test]
    fn test_resolve_cli_log_level_wins() {
        let config = RupeeConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("trace"), &mut StartupNotes::default());
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "debug"
log_file = "/tmp/rupee-test.log"

[notifications]
duration_ms = 3500
"#;
        let config: RupeeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.general.log_file.as_deref(),
            Some("/tmp/rupee-test.log")
        );
        assert_eq!(config.notifications.duration_ms, Some(3500));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[notifications]
duration_ms = 500
"#;
        let config: RupeeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notifications.duration_ms, Some(500));
        assert!(config.general.log_level.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("rupee-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[notifications]\nduration_ms = \"soon\"\n").unwrap();

        let result = load_config_from(&path, &mut StartupNotes::default());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        assert!(result.unwrap_err().to_string().starts_with("config parse error"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("rupee-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let mut notes = StartupNotes::default();
        let config = load_config_from(&path, &mut notes).unwrap();
        assert!(config.general.log_level.is_none());
        assert_eq!(notes.entries().len(), 1);
        assert_eq!(notes.entries()[0].0, Level::Info);
        assert!(notes.entries()[0].1.contains("generating default"));

        // The generated file parses back to an all-default config
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [notifications]"));
        let reparsed: RupeeConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.notifications.duration_ms.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_notification_env_value_is_noted() {
        let mut notes = StartupNotes::default();
        assert_eq!(parse_notification_ms(Some("soon".to_string()), &mut notes), None);
        assert_eq!(notes.entries().len(), 1);
        assert_eq!(notes.entries()[0].0, Level::Warn);
        assert!(notes.entries()[0].1.contains("RUPEE_NOTIFICATION_MS"));

        let mut quiet = StartupNotes::default();
        assert_eq!(parse_notification_ms(Some("750".to_string()), &mut quiet), Some(750));
        assert_eq!(parse_notification_ms(None, &mut quiet), None);
        assert!(quiet.entries().is_empty());
    }

    #[test]
    fn test_unwritable_default_config_is_noted() {
        // Parent "directory" is a plain file, so creating it fails
        let blocker = std::env::temp_dir().join(format!("rupee-block-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let mut notes = StartupNotes::default();
        let config = load_config_from(&path, &mut notes).unwrap();
        assert!(config.notifications.duration_ms.is_none());
        assert!(
            notes
                .entries()
                .iter()
                .any(|(level, msg)| *level == Level::Warn && msg.contains("config directory"))
        );

        fs::remove_file(&blocker).unwrap();
    }
}
