//! # Configuration
//!
//! Application settings loaded once at startup.
//!
//! Config lives at `~/.config/skeleton/config.json` unless `--config` points
//! elsewhere. If the file is missing on first run, the defaults are written
//! there so users can discover every option. Files ending in `.toml` are read
//! and written as TOML; everything else is JSON.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub debug: bool,
    pub theme: ThemeConfig,
    pub keybindings: KeybindingConfig,
    /// Where this config was loaded from (and will be saved to).
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Named color scheme: "default" or "monochrome"
    pub color_scheme: String,
    pub use_emoji: bool,
    /// Show a ticking clock in the status bar
    pub show_clock: bool,
}

/// Key-name aliases per action, e.g. `quit = ["q", "ctrl+c"]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub help: Vec<String>,
    pub input: Vec<String>,
    pub refresh: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_APP_NAME: &str = "Skeleton";
pub const DEFAULT_COLOR_SCHEME: &str = "default";

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            theme: ThemeConfig::default(),
            keybindings: KeybindingConfig::default(),
            path: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
            use_emoji: true,
            show_clock: false,
        }
    }
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        fn keys(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }
        Self {
            quit: keys(&["q", "ctrl+c"]),
            help: keys(&["h", "?"]),
            input: keys(&["i"]),
            refresh: keys(&["r"]),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    TomlParse(toml::de::Error),
    TomlWrite(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Json(e) => write!(f, "config parse error: {e}"),
            ConfigError::TomlParse(e) => write!(f, "config parse error: {e}"),
            ConfigError::TomlWrite(e) => write!(f, "config write error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Format
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

// ============================================================================
// Loading / Saving
// ============================================================================

/// Returns the path to `~/.config/skeleton/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("skeleton").join("config.json"))
}

impl Config {
    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults and writes them to that path. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let Some(path) = path.or_else(default_config_path) else {
            warn!("Could not determine home directory, using default config");
            return Ok(Config::default());
        };

        if !path.exists() {
            info!("No config file found, writing defaults to {}", path.display());
            let config = Config {
                path: Some(path),
                ..Default::default()
            };
            if let Err(e) = config.save() {
                warn!("Failed to write default config: {e}");
            }
            return Ok(config);
        }

        let config = Self::load_from(&path)?;
        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Read and parse an existing file. Fields absent from the file keep
    /// their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Config = match Format::for_path(path) {
            Format::Json => serde_json::from_str(&contents).map_err(ConfigError::Json)?,
            Format::Toml => toml::from_str(&contents).map_err(ConfigError::TomlParse)?,
        };
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Write the whole config back to `self.path`, creating parent
    /// directories. A config with no path is not persisted.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }

        let contents = match Format::for_path(path) {
            Format::Json => serde_json::to_string_pretty(self).map_err(ConfigError::Json)?,
            Format::Toml => toml::to_string_pretty(self).map_err(ConfigError::TomlWrite)?,
        };
        fs::write(path, contents).map_err(ConfigError::Io)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }
}
