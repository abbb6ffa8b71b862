//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flashdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolving happen before the logger exists (the log file is
//! itself a setting), so nothing here logs. What happened is returned as a
//! `ConfigOrigin` plus `ResolvedConfig::warnings` for `main` to log later.

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub enabled: Option<bool>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/onurbayl/data/refs/heads/main/data.json";
pub const DEFAULT_LOG_FILE: &str = "flashdeck.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(target_os = "macos")]
pub const DEFAULT_SPEECH_COMMAND: &str = "say";
#[cfg(target_os = "macos")]
const DEFAULT_SPEECH_ARGS: &[&str] = &["-v", "Samantha"];

#[cfg(not(target_os = "macos"))]
pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";
#[cfg(not(target_os = "macos"))]
const DEFAULT_SPEECH_ARGS: &[&str] = &["-v", "en-us"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckLocation {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub location: DeckLocation,
    pub speech_enabled: bool,
    pub speech_command: String,
    pub speech_args: Vec<String>,
    pub log_file: String,
    pub log_level: LevelFilter,
    /// Settings that were ignored during resolution, to be logged.
    pub warnings: Vec<String>,
}

/// Values taken from CLI flags. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub no_speech: bool,
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

/// What `load_config` found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// No home directory, so defaults only.
    NoHomeDir,
    /// First run: a commented default was written, or writing it failed.
    Generated { path: PathBuf, error: Option<String> },
    /// Parsed from an existing file.
    File(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::NoHomeDir => write!(f, "no home directory, using defaults"),
            ConfigOrigin::Generated { path, error: None } => {
                write!(f, "no config file, generated default at {}", path.display())
            }
            ConfigOrigin::Generated {
                path,
                error: Some(e),
            } => write!(f, "failed to write default config to {}: {e}", path.display()),
            ConfigOrigin::File(path) => write!(f, "loaded config from {}", path.display()),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flashdeck").join("config.toml"))
}

/// Load config from `~/.flashdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlashdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(FlashdeckConfig, ConfigOrigin), ConfigError> {
    match config_path() {
        Some(path) => load_config_at(&path),
        None => Ok((FlashdeckConfig::default(), ConfigOrigin::NoHomeDir)),
    }
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_at(path: &Path) -> Result<(FlashdeckConfig, ConfigOrigin), ConfigError> {
    if !path.exists() {
        let error = generate_default_config(path).err().map(|e| e.to_string());
        let origin = ConfigOrigin::Generated {
            path: path.to_path_buf(),
            error,
        };
        return Ok((FlashdeckConfig::default(), origin));
    }

    let config = load_config_from(path)?;
    Ok((config, ConfigOrigin::File(path.to_path_buf())))
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<FlashdeckConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Flashdeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "flashdeck.log"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [source]
# url = "https://raw.githubusercontent.com/onurbayl/data/refs/heads/main/data.json"
# file = "/path/to/cards.json"      # Takes priority over url. Or set FLASHDECK_DECK_FILE

# [speech]
# enabled = true
# command = "espeak-ng"              # Or set FLASHDECK_SPEECH_COMMAND
# args = ["-v", "en-us"]             # The word is appended as the last argument
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlashdeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &FlashdeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();
    let location = resolve_location(config, cli, &env);

    let speech_enabled = !cli.no_speech && config.speech.enabled.unwrap_or(true);

    // Speech command: env → config → default. Args only come from config
    // when the command does, so a custom program never gets espeak flags.
    let (speech_command, speech_args) = match env("FLASHDECK_SPEECH_COMMAND") {
        Some(command) => (command, Vec::new()),
        None => match &config.speech.command {
            Some(command) => (
                command.clone(),
                config.speech.args.clone().unwrap_or_default(),
            ),
            None => (
                DEFAULT_SPEECH_COMMAND.to_string(),
                config
                    .speech
                    .args
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SPEECH_ARGS.iter().map(|s| s.to_string()).collect()),
            ),
        },
    };

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warnings.push(format!(
                "Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        location,
        speech_enabled,
        speech_command,
        speech_args,
        log_file,
        log_level,
        warnings,
    }
}

/// File beats URL at every level; higher levels beat lower ones.
fn resolve_location(
    config: &FlashdeckConfig,
    cli: &CliOverrides,
    env: &impl Fn(&str) -> Option<String>,
) -> DeckLocation {
    if let Some(ref file) = cli.file {
        return DeckLocation::File(file.clone());
    }
    if let Some(ref url) = cli.url {
        return DeckLocation::Url(url.clone());
    }
    if let Some(file) = env("FLASHDECK_DECK_FILE") {
        return DeckLocation::File(PathBuf::from(file));
    }
    if let Some(url) = env("FLASHDECK_DATA_URL") {
        return DeckLocation::Url(url);
    }
    if let Some(ref file) = config.source.file {
        return DeckLocation::File(PathBuf::from(file));
    }
    DeckLocation::Url(
        config
            .source
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
    )
}
