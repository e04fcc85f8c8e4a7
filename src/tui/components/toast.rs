//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-left corner, clear of the theme toggle.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
#[derive(Debug)]
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self::new_at(message, Instant::now())
    }

    pub fn new_at(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created_at: now,
            duration: TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Uses `Clear` so the toast sits on top of other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 chars padding each side, including the border
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(2));
        let height = 3;

        let x = area.x + 1;
        let y = area.bottom().saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .style(theme.inverse());

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(theme.inverse())
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let t0 = Instant::now();
        let toast = Toast::new_at("Copied", t0);
        assert!(!toast.is_expired(t0 + Duration::from_millis(1999)));
        assert!(toast.is_expired(t0 + TOAST_DURATION));
    }
}
