//! Interaction tuning: wheel navigation, typography, cursor, contact timing
//!
//! Each section follows the same shape: a resolved struct with defaults and
//! a `File*` mirror of optional fields that `from_file()` merges over them.

use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Wheel-driven section navigation
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Accumulated |deltaY| needed to commit a transition
    pub wheel_threshold: f64,
    /// Lockout after a committed wheel transition
    pub cooldown_ms: u64,
    /// Delta reported per wheel notch (terminals report notches, not pixels)
    pub wheel_delta_per_notch: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 100.0,
            cooldown_ms: 1000,
            wheel_delta_per_notch: 40.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileNavigation {
    pub wheel_threshold: Option<f64>,
    pub cooldown_ms: Option<u64>,
    pub wheel_delta_per_notch: Option<f64>,
}

impl NavigationConfig {
    pub fn from_file(file: Option<FileNavigation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            wheel_threshold: file
                .wheel_threshold
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.wheel_threshold),
            cooldown_ms: file.cooldown_ms.unwrap_or(defaults.cooldown_ms),
            wheel_delta_per_notch: file
                .wheel_delta_per_notch
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.wheel_delta_per_notch),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typography
// ─────────────────────────────────────────────────────────────────────────────

/// Dynamic font size bounds and the nominal cell size used when the
/// terminal doesn't report pixel dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyConfig {
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            min_font_size: 24.0,
            max_font_size: 80.0,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTypography {
    pub min_font_size: Option<f64>,
    pub max_font_size: Option<f64>,
    pub cell_width_px: Option<f64>,
    pub cell_height_px: Option<f64>,
}

impl TypographyConfig {
    /// Bounds are kept as written; `FontScale` orders them
    pub fn from_file(file: Option<FileTypography>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        let positive = |v: &f64| v.is_finite() && *v > 0.0;

        Self {
            min_font_size: file
                .min_font_size
                .filter(positive)
                .unwrap_or(defaults.min_font_size),
            max_font_size: file
                .max_font_size
                .filter(positive)
                .unwrap_or(defaults.max_font_size),
            cell_width_px: file
                .cell_width_px
                .filter(positive)
                .unwrap_or(defaults.cell_width_px),
            cell_height_px: file
                .cell_height_px
                .filter(positive)
                .unwrap_or(defaults.cell_height_px),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Cursor-follow dot
#[derive(Debug, Clone, PartialEq)]
pub struct CursorConfig {
    pub enabled: bool,
    pub normal_dot_size: f64,
    pub enlarged_dot_size: f64,
    /// Spring stiffness (unit mass, critically damped)
    pub stiffness: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            normal_dot_size: 20.0,
            enlarged_dot_size: 35.0,
            stiffness: 200.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileCursor {
    pub enabled: Option<bool>,
    pub normal_dot_size: Option<f64>,
    pub enlarged_dot_size: Option<f64>,
    pub stiffness: Option<f64>,
}

impl CursorConfig {
    pub fn from_file(file: Option<FileCursor>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        let positive = |v: &f64| v.is_finite() && *v > 0.0;

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            normal_dot_size: file
                .normal_dot_size
                .filter(positive)
                .unwrap_or(defaults.normal_dot_size),
            enlarged_dot_size: file
                .enlarged_dot_size
                .filter(positive)
                .unwrap_or(defaults.enlarged_dot_size),
            stiffness: file
                .stiffness
                .filter(positive)
                .unwrap_or(defaults.stiffness),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────────────────

/// Contact section timing
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    /// Period of the rotating "about" word
    pub rotate_interval_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileContact {
    pub rotate_interval_ms: Option<u64>,
}

impl ContactConfig {
    pub fn from_file(file: Option<FileContact>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            rotate_interval_ms: file
                .rotate_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(Self::default().rotate_interval_ms),
        }
    }
}
