//! Configuration for the portfolio TUI
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `main`.

use crate::theme::ThemeMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod interaction;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use interaction::{
    ContactConfig, CursorConfig, FileContact, FileCursor, FileNavigation, FileTypography,
    NavigationConfig, TypographyConfig,
};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_FRAME_MS: u64 = 33;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial theme mode
    pub theme: ThemeMode,

    /// Frame period in milliseconds (drives cursor smoothing and redraws)
    pub frame_ms: u64,

    /// Capture the mouse (cursor dot, hover, clicks, wheel)
    pub mouse_enabled: bool,

    /// Wheel threshold and cooldown
    pub navigation: NavigationConfig,

    /// Dynamic font size bounds and cell metrics
    pub typography: TypographyConfig,

    /// Cursor dot sizes and spring stiffness
    pub cursor: CursorConfig,

    /// Contact section timing
    pub contact: ContactConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            frame_ms: DEFAULT_FRAME_MS,
            mouse_enabled: true,
            navigation: NavigationConfig::default(),
            typography: TypographyConfig::default(),
            cursor: CursorConfig::default(),
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every field optional so partial files work
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub frame_ms: Option<u64>,
    pub mouse: Option<bool>,

    /// Optional [navigation] section
    pub navigation: Option<FileNavigation>,

    /// Optional [typography] section
    pub typography: Option<FileTypography>,

    /// Optional [cursor] section
    pub cursor: Option<FileCursor>,

    /// Optional [contact] section
    pub contact: Option<FileContact>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file body
    pub(crate) fn parse_file(contents: &str) -> Result<FileConfig> {
        toml::from_str(contents).context("Invalid config file")
    }

    /// Load file config if it exists. A file that exists but can't be read
    /// or parsed is an error: a broken config should fail fast rather than
    /// silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = match env("FOLIO_THEME").or(file.theme) {
            Some(name) => ThemeMode::from_str(&name)
                .with_context(|| format!("Unknown theme '{}' (expected dark or light)", name))?,
            None => defaults.theme,
        };

        // Frame period: file > default, never zero
        let frame_ms = file.frame_ms.unwrap_or(defaults.frame_ms).max(1);

        // Mouse capture: env kill switch > file > default
        let mouse_enabled = match env("FOLIO_NO_MOUSE") {
            Some(v) => !(v == "1" || v.eq_ignore_ascii_case("true")),
            None => file.mouse.unwrap_or(defaults.mouse_enabled),
        };

        let mut logging = LoggingConfig::from_file(file.logging)?;
        // Log directory: env > file > default
        if let Some(dir) = env("FOLIO_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Ok(Self {
            theme,
            frame_ms,
            mouse_enabled,
            navigation: NavigationConfig::from_file(file.navigation),
            typography: TypographyConfig::from_file(file.typography),
            cursor: CursorConfig::from_file(file.cursor),
            contact: ContactConfig::from_file(file.contact),
            logging,
        })
    }
}
