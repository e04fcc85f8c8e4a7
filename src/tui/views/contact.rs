// Contact section - greeting, rotating word, link grid, footer
//
// The rotating word advances on the section's scoped timer. The selected
// link (keyboard) and the hovered link (mouse) both render filled.

use crate::content::{CONTACT_GREETING, CONTACT_LINKS, CONTACT_PITCH, COPYRIGHT_HOLDER};
use crate::tui::app::App;
use crate::tui::hit_test::Target;
use crate::tui::theme::Theme;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CONTENT_MAX_WIDTH: u16 = 90;
const LINK_HEIGHT: u16 = 3;
const LINK_GAP: u16 = 1;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let width = area.width.min(CONTENT_MAX_WIDTH);
    let content = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let columns = app.breakpoint.link_columns();
    let link_rows = CONTACT_LINKS.len().div_ceil(columns) as u16;
    let grid_height = link_rows * LINK_HEIGHT + link_rows.saturating_sub(1) * LINK_GAP;

    let [heading, _, grid, _, pitch, _, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(content);

    render_heading(f, heading, app);
    render_links(f, grid, app, columns);

    f.render_widget(
        Paragraph::new(CONTACT_PITCH)
            .style(app.theme.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        pitch,
    );
    f.render_widget(
        Paragraph::new(footer_text(chrono::Local::now().year()))
            .style(app.theme.base().fg(app.theme.muted))
            .alignment(Alignment::Center),
        footer,
    );
}

fn render_heading(f: &mut Frame, area: Rect, app: &App) {
    let scale = app.text_scale();
    let word = app.about.current();
    let lines = vec![
        Line::styled(
            scale.apply(CONTACT_GREETING),
            app.theme.base().fg(app.theme.muted),
        ),
        Line::styled(scale.apply(word), app.theme.bold()),
        Line::styled("─".repeat(area.width as usize), app.theme.base()),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_links(f: &mut Frame, area: Rect, app: &mut App, columns: usize) {
    let theme = app.theme.clone();
    for (index, link) in CONTACT_LINKS.iter().enumerate() {
        let rect = link_rect(area, index, columns);
        if rect.is_empty() {
            continue;
        }
        let target = Target::ContactLink(index);
        let filled = app.contact_cursor == index || app.is_hovered(target);
        let style = if filled { theme.inverse() } else { theme.base() };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .style(style);
        f.render_widget(
            Paragraph::new(Line::styled(link.name, Theme::hovered(style, filled)))
                .alignment(Alignment::Center)
                .block(block),
            rect,
        );
        app.hit_map.register(rect, target);
    }
}

/// Cell of the `index`th link in a grid of `columns`
fn link_rect(area: Rect, index: usize, columns: usize) -> Rect {
    let columns = columns.max(1) as u16;
    let gaps = (columns - 1) * LINK_GAP;
    let cell_width = area.width.saturating_sub(gaps) / columns;
    let column = index as u16 % columns;
    let row = index as u16 / columns;

    let x = area.x + column * (cell_width + LINK_GAP);
    let y = area.y + row * (LINK_HEIGHT + LINK_GAP);
    Rect::new(x, y, cell_width, LINK_HEIGHT).intersection(area)
}

fn footer_text(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COPYRIGHT_HOLDER)
}
