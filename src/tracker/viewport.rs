//! Viewport tracker: dynamic font size from terminal dimensions
//!
//! `size = clamp(min(width / 25, height / 12), floor, ceiling)`, recomputed at
//! mount and on every resize. The bounds are ordered on construction so the
//! smaller one is always the floor, whichever order they were configured in.

use super::Derivation;

const WIDTH_DIVISOR: f64 = 25.0;
const HEIGHT_DIVISOR: f64 = 12.0;

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Build from what the terminal reports. Terminals that don't report a
    /// pixel size (0) fall back to cell count times the nominal cell size.
    pub fn measure(
        columns: u16,
        rows: u16,
        pixel_width: u16,
        pixel_height: u16,
        cell_width_px: f64,
        cell_height_px: f64,
    ) -> Self {
        let width = if pixel_width > 0 {
            f64::from(pixel_width)
        } else {
            f64::from(columns) * cell_width_px
        };
        let height = if pixel_height > 0 {
            f64::from(pixel_height)
        } else {
            f64::from(rows) * cell_height_px
        };
        Self::new(width, height)
    }
}

/// Clamped font size derivation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    floor: f64,
    ceiling: f64,
}

impl FontScale {
    pub fn new(bound_a: f64, bound_b: f64) -> Self {
        Self {
            floor: bound_a.min(bound_b),
            ceiling: bound_a.max(bound_b),
        }
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn compute(&self, viewport: Viewport) -> f64 {
        let Viewport { width, height } = viewport;
        // Not laid out yet (or nonsense): fall back to the floor
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return self.floor;
        }
        let candidate = (width / WIDTH_DIVISOR).min(height / HEIGHT_DIVISOR);
        self.floor.max(candidate.min(self.ceiling))
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::new(24.0, 80.0)
    }
}

impl Derivation for FontScale {
    type Raw = Viewport;
    type Output = f64;

    fn derive(&mut self, raw: Viewport) -> f64 {
        self.compute(raw)
    }
}

/// How headline text is treated at a given font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScale {
    /// Plain text, tight terminals
    Plain,
    /// Letter-spaced
    Spaced,
    /// Letter-spaced with blank lines between rows
    Banner,
}

impl TextScale {
    pub fn from_font_size(size: f64) -> Self {
        if size >= 60.0 {
            TextScale::Banner
        } else if size >= 40.0 {
            TextScale::Spaced
        } else {
            TextScale::Plain
        }
    }

    /// Apply the treatment to a single line of text
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextScale::Plain => text.to_string(),
            TextScale::Spaced | TextScale::Banner => {
                let mut out = String::with_capacity(text.len() * 2);
                for (i, c) in text.chars().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push(c);
                }
                out
            }
        }
    }

    /// Blank rows between headline lines
    pub fn line_gap(&self) -> u16 {
        match self {
            TextScale::Banner => 1,
            _ => 0,
        }
    }
}
