// Home section - the headline block
//
// Headline lines take the letter-spacing treatment chosen from the current
// font size; a line that doesn't fit spaced falls back to plain.

use crate::content::HEADLINE;
use crate::tracker::TextScale;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SIDE_PADDING: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let inner = Rect::new(
        area.x + SIDE_PADDING.min(area.width / 2),
        area.y,
        area.width.saturating_sub(SIDE_PADDING * 2),
        area.height,
    );
    let lines = headline_lines(app.text_scale(), inner.width);

    let height = (lines.len() as u16).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    let block_area = Rect::new(inner.x, top, inner.width, height);

    let paragraph = Paragraph::new(lines)
        .style(app.theme.bold())
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, block_area);
}

/// Headline rows for a scale and width, including blank gap rows
fn headline_lines(scale: TextScale, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(HEADLINE.len() * 2);
    for (i, text) in HEADLINE.iter().enumerate() {
        if i > 0 {
            for _ in 0..scale.line_gap() {
                lines.push(Line::raw(""));
            }
        }
        let scaled = scale.apply(text);
        let line = if scaled.width() <= usize::from(width) {
            scaled
        } else {
            text.to_string()
        };
        lines.push(Line::raw(line));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_gaps() {
        let lines = headline_lines(TextScale::Plain, 200);
        assert_eq!(lines.len(), HEADLINE.len());
        assert_eq!(lines[0].to_string(), HEADLINE[0]);
    }

    #[test]
    fn test_banner_inserts_gap_rows() {
        let lines = headline_lines(TextScale::Banner, 200);
        assert_eq!(lines.len(), HEADLINE.len() * 2 - 1);
        assert_eq!(lines[1].to_string(), "");
    }

    #[test]
    fn test_spaced_falls_back_when_too_wide() {
        let longest = HEADLINE.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
        let lines = headline_lines(TextScale::Spaced, longest);
        // Every line fits plain at this width, none fit spaced
        for (line, text) in lines.iter().zip(HEADLINE.iter()) {
            assert_eq!(line.to_string(), *text);
        }
    }
}
