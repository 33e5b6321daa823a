//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.todos/config.toml` unless `--config` points elsewhere.
//! A missing default file just means defaults; nothing is written to disk.
//! Loading happens before the logger exists, so this module reports through
//! return values and `main` logs the outcome.
//! Todos themselves are never configured or stored here.

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodosConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    /// A path, or `"stderr"`.
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
    pub done_marker: Option<String>,
    pub pending_marker: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        LogLevel::from_str(s.trim(), true).ok()
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "todos.log";
pub const DEFAULT_DONE_MARKER: &str = "[DONE]";
pub const DEFAULT_PENDING_MARKER: &str = "[TODO]";
const STDERR_TARGET: &str = "stderr";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_target: LogTarget,
    pub color: bool,
    pub done_marker: String,
    pub pending_marker: String,
}

/// Values from CLI flags (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
    pub no_color: bool,
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

/// Returns the path to `~/.todos/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".todos").join("config.toml"))
}

/// The file `load_config` will read: `explicit` if given, otherwise the
/// default path when it exists. `None` means defaults only.
pub fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config_path().filter(|p| p.exists()),
    }
}

/// Load config from `explicit`, or from `~/.todos/config.toml`.
///
/// A missing default file yields `TodosConfig::default()`. A missing explicit
/// file is an error, since the user asked for it by name.
pub fn load_config(explicit: Option<&Path>) -> Result<TodosConfig, ConfigError> {
    let Some(path) = config_source(explicit) else {
        return Ok(TodosConfig::default());
    };
    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<TodosConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config against the process environment.
pub fn resolve(config: &TodosConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve_with_env(
    config: &TodosConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env("TODOS_LOG_LEVEL").and_then(|s| LogLevel::parse(&s)))
        .or(config.logging.level)
        .unwrap_or_default()
        .to_filter();

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TODOS_LOG_FILE"))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    let log_target = if log_file.eq_ignore_ascii_case(STDERR_TARGET) {
        LogTarget::Stderr
    } else {
        LogTarget::File(PathBuf::from(log_file))
    };

    // Any NO_COLOR value disables colour, per no-color.org
    let color = !cli.no_color
        && env("NO_COLOR").is_none_or(|v| v.is_empty())
        && config.display.color.unwrap_or(true);

    ResolvedConfig {
        log_level,
        log_target,
        color,
        done_marker: config
            .display
            .done_marker
            .clone()
            .unwrap_or_else(|| DEFAULT_DONE_MARKER.to_string()),
        pending_marker: config
            .display
            .pending_marker
            .clone()
            .unwrap_or_else(|| DEFAULT_PENDING_MARKER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TodosConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(
            resolved.log_target,
            LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
        assert!(resolved.color);
        assert_eq!(resolved.done_marker, "[DONE]");
        assert_eq!(resolved.pending_marker, "[TODO]");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[logging]
level = "debug"
file = "stderr"

[display]
color = false
done_marker = "[x]"
pending_marker = "[ ]"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.logging.level, Some(LogLevel::Debug));
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_target, LogTarget::Stderr);
        assert!(!resolved.color);
        assert_eq!(resolved.done_marker, "[x]");
        assert_eq!(resolved.pending_marker, "[ ]");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[display]\ndone_marker = \"done\"\n").unwrap();
        assert_eq!(config.display.done_marker.as_deref(), Some("done"));
        assert!(config.display.pending_marker.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[logging\nlevel = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(parse_config("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_env_overrides_config() {
        let config = parse_config("[logging]\nlevel = \"warn\"\nfile = \"a.log\"\n").unwrap();
        let env = |key: &str| match key {
            "TODOS_LOG_LEVEL" => Some("TRACE".to_string()),
            "TODOS_LOG_FILE" => Some("b.log".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.log_target, LogTarget::File(PathBuf::from("b.log")));
    }

    #[test]
    fn test_bad_env_level_falls_through() {
        let config = parse_config("[logging]\nlevel = \"warn\"\n").unwrap();
        let env = |key: &str| (key == "TODOS_LOG_LEVEL").then(|| "nonsense".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_cli_wins() {
        let config = parse_config("[logging]\nlevel = \"warn\"\n").unwrap();
        let cli = CliOverrides {
            log_level: Some(LogLevel::Off),
            log_file: Some("STDERR".to_string()),
            no_color: true,
        };
        let env = |key: &str| (key == "TODOS_LOG_LEVEL").then(|| "debug".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.log_level, LevelFilter::Off);
        assert_eq!(resolved.log_target, LogTarget::Stderr);
        assert!(!resolved.color);
    }

    #[test]
    fn test_no_color_env() {
        let set = |key: &str| (key == "NO_COLOR").then(|| "1".to_string());
        assert!(!resolve_with_env(&TodosConfig::default(), &CliOverrides::default(), set).color);

        let empty = |key: &str| (key == "NO_COLOR").then(String::new);
        assert!(resolve_with_env(&TodosConfig::default(), &CliOverrides::default(), empty).color);
    }

    #[test]
    fn test_explicit_source_is_used_even_if_missing() {
        let path = Path::new("/definitely/not/here/config.toml");
        assert_eq!(config_source(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
