//! Logging output: level, optional JSON files and their rotation
//!
//! Unlike the interaction sections, a bad value here is an error rather than
//! a silent fallback: a typo in `file_rotation` or `level` would otherwise
//! quietly change where (or whether) logs end up.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Rotation
// ─────────────────────────────────────────────────────────────────────────────

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for the lifetime of the log directory
    Never,
}

impl LogRotation {
    /// Case-insensitive; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter level for folio's own targets; `RUST_LOG` overrides it
    pub level: String,
    /// Write JSON lines next to the in-app log buffer
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem, e.g. "folio" -> "folio.2026-10-17"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "folio".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(level) => {
                let level = level.trim().to_lowercase();
                level
                    .parse::<tracing::Level>()
                    .ok()
                    .with_context(|| format!("Unknown log level '{}'", level))?;
                level
            }
            None => defaults.level,
        };

        let file_rotation = match file.file_rotation {
            Some(name) => LogRotation::parse(&name).with_context(|| {
                format!(
                    "Unknown log rotation '{}' (expected hourly, daily or never)",
                    name
                )
            })?,
            None => defaults.file_rotation,
        };

        let file_prefix = file.file_prefix.unwrap_or(defaults.file_prefix);
        if file_prefix.trim().is_empty() {
            bail!("Log file prefix must not be empty");
        }

        Ok(Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix,
        })
    }
}
