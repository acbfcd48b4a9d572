//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flashdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::deck::LoadOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_deck: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    pub sort_by_score: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_score: Option<bool>,
    pub show_hints: Option<bool>,
}

/// Values supplied on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deck: Option<PathBuf>,
    pub limit: Option<usize>,
    pub sort_by_score: bool,
    pub no_hints: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_SHOW_SCORE: bool = true;
pub const DEFAULT_SHOW_HINTS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` when nothing named a deck; the caller reports it.
    pub deck_path: Option<PathBuf>,
    pub load_options: LoadOptions,
    pub log_level: LevelFilter,
    pub show_score: bool,
    pub show_hints: bool,
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

/// Returns the path to `~/.flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flashdeck").join("config.toml"))
}

/// Load config from `~/.flashdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlashdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FlashdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FlashdeckConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FlashdeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FlashdeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FlashdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Flashdeck Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_deck = "~/decks/biology.json"   # Or set FLASHDECK_DECK env var
# log_level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"

# [deck]
# Both are off by default, so cards show in file order.
# Uncomment both lines to study only the five highest-scored cards.
# sort_by_score = true                     # Highest-scored cards first
# limit = 5                                # Keep only the first N cards

# [ui]
# show_score = true
# show_hints = true
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

pub const ENV_DECK: &str = "FLASHDECK_DECK";
pub const ENV_LOG: &str = "FLASHDECK_LOG";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlashdeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(
    config: &FlashdeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Deck: CLI → env → config
    let deck_path = cli
        .deck
        .clone()
        .or_else(|| env(ENV_DECK).map(PathBuf::from))
        .or_else(|| config.general.default_deck.as_deref().map(expand_home));

    // Log level: env → config → default
    let log_level = env(ENV_LOG)
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let load_options = LoadOptions {
        sort_by_score: cli.sort_by_score || config.deck.sort_by_score.unwrap_or(false),
        limit: cli.limit.or(config.deck.limit),
    };

    let show_hints = !cli.no_hints && config.ui.show_hints.unwrap_or(DEFAULT_SHOW_HINTS);

    ResolvedConfig {
        deck_path,
        load_options,
        log_level,
        show_score: config.ui.show_score.unwrap_or(DEFAULT_SHOW_SCORE),
        show_hints,
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', using default", s);
            None
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
