//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme at startup: dark or light (FOLIO_THEME overrides)
theme = "{theme}"

# Frame period in milliseconds (cursor smoothing, redraws)
frame_ms = {frame_ms}

# Capture the mouse: cursor dot, hover, clicks, wheel navigation
# (FOLIO_NO_MOUSE=1 disables)
mouse = {mouse}

# Wheel-driven section navigation
[navigation]
wheel_threshold = {wheel_threshold:?}
cooldown_ms = {cooldown_ms}
# Terminals report wheel notches, not pixel deltas
wheel_delta_per_notch = {wheel_delta:?}

# Dynamic text scale: min(width/25, height/12) clamped to the bounds
[typography]
min_font_size = {min_font:?}
max_font_size = {max_font:?}
# Used when the terminal doesn't report its pixel size
cell_width_px = {cell_w:?}
cell_height_px = {cell_h:?}

# Cursor-follow dot
[cursor]
enabled = {cursor_enabled}
normal_dot_size = {dot_normal:?}
enlarged_dot_size = {dot_enlarged:?}
stiffness = {stiffness:?}

# Contact section
[contact]
rotate_interval_ms = {rotate_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-TUI log buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme.as_str(),
            frame_ms = self.frame_ms,
            mouse = self.mouse_enabled,
            wheel_threshold = self.navigation.wheel_threshold,
            cooldown_ms = self.navigation.cooldown_ms,
            wheel_delta = self.navigation.wheel_delta_per_notch,
            min_font = self.typography.min_font_size,
            max_font = self.typography.max_font_size,
            cell_w = self.typography.cell_width_px,
            cell_h = self.typography.cell_height_px,
            cursor_enabled = self.cursor.enabled,
            dot_normal = self.cursor.normal_dot_size,
            dot_enlarged = self.cursor.enlarged_dot_size,
            stiffness = self.cursor.stiffness,
            rotate_ms = self.contact.rotate_interval_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
