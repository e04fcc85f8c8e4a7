// Modal overlay rendering
//
// - Help modal: keyboard and mouse bindings
// - Logs modal: recent entries from the in-memory log buffer

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::modal::Modal;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs { offset } => render_logs(f, app, *offset),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(theme: &Theme, title: &'a str, hint: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.base())
        .title(title)
        .title_bottom(Line::from(hint).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = theme.bold();
    let desc_style = theme.base();
    let header_style = theme.base().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("j/↓, k/↑", "Next / previous section"),
        kb("1 2 3", "Home / Works / Contact"),
        kb("m", "Open / close menu"),
        kb("Enter", "Open project or link"),
        Line::raw(""),
        Line::from(Span::styled("  Works & Contact", header_style)),
        kb("h/←, l/→", "Previous / next"),
        kb("y", "Copy contact link"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle theme"),
        kb("L", "Recent logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Wheel", "Change section"),
        kb("Click", "Buttons, cards, links"),
    ]);

    let height = content.lines.len() as u16 + 3;
    let area = centered_rect(46, height, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .style(theme.base())
            .block(modal_block(theme, " Help ", " Press ? or Esc to close ")),
        area,
    );
}

fn render_logs(f: &mut Frame, app: &App, offset: usize) {
    let theme = &app.theme;
    let screen = f.area();
    let area = centered_rect(
        screen.width.saturating_sub(8).max(40),
        screen.height.saturating_sub(4).max(8),
        screen,
    );
    let rows = area.height.saturating_sub(2) as usize;

    let entries = app.log_buffer.recent(rows + offset);
    let visible = entries.len().saturating_sub(offset);
    let lines: Vec<Line> = if app.log_buffer.is_empty() {
        vec![Line::styled("  No log entries yet", theme.base().fg(theme.muted))]
    } else {
        entries[..visible]
            .iter()
            .rev()
            .take(rows)
            .rev()
            .map(|entry| log_line(entry, theme))
            .collect()
    };

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .style(theme.base())
            .block(modal_block(theme, " Logs ", " ↑/↓ scroll · L or Esc to close ")),
        area,
    );
}

fn log_line<'a>(entry: &'a LogEntry, theme: &Theme) -> Line<'a> {
    let level_color = match entry.level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug => theme.log_debug,
        LogLevel::Trace => theme.log_trace,
    };
    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            theme.base().fg(theme.muted),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            Style::default().fg(level_color),
        ),
        Span::styled(
            format!("{} ", entry.target),
            theme.base().fg(theme.muted),
        ),
        Span::styled(entry.message.as_str(), theme.base()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(46, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));
        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }
}
