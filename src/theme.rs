// Theme controller - dark/light mode shared by every view
//
// A single boolean plus a toggle. Starts dark unless configured otherwise.
// Palettes live in `tui::theme`; this module only owns the mode.

use serde::Deserialize;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse a mode name from config or env, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Holds the current mode
#[derive(Debug, Clone, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}
