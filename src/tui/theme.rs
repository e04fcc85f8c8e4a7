// Color palettes for the two theme modes
//
// The site is monochrome: a base pair (background/foreground) and its
// inverse, used for chrome buttons, the menu overlay and the works panel.

use crate::theme::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Complete palette for one mode
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Secondary text (descriptions, footer)
    pub muted: Color,
    /// Background pattern behind the works card
    pub faint: Color,
    pub border_type: BorderType,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            muted: Color::Gray,
            faint: Color::DarkGray,
            border_type: BorderType::Plain,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            faint: Color::Gray,
            border_type: BorderType::Plain,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Page style
    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    /// Inverted style for chrome buttons and overlays
    pub fn inverse(&self) -> Style {
        Style::default().bg(self.fg).fg(self.bg)
    }

    pub fn bold(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    /// Hover treatment for buttons (the site underlines on hover)
    pub fn hovered(style: Style, hovered: bool) -> Style {
        if hovered {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_swaps_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.inverse().bg, Some(Color::White));
        assert_eq!(theme.inverse().fg, Some(Color::Black));
        assert_eq!(Theme::for_mode(ThemeMode::Light).bg, Color::White);
    }

    #[test]
    fn test_hover_underlines() {
        let style = Theme::hovered(Style::default(), true);
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(Theme::hovered(Style::default(), false), Style::default());
    }
}
