// Works section - project carousel over a faint backdrop
//
// The section paints in inverse colors, the card in page colors. Clicking
// the card opens the project; ← / → buttons cycle the carousel.

use crate::content::{Project, PROJECTS, WORKS_BACKDROP};
use crate::tui::app::App;
use crate::tui::hit_test::Target;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    f.render_widget(Block::default().style(theme.inverse()), area);
    render_backdrop(f, area, &theme);

    let [card_zone, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .areas(area);

    let card = card_rect(card_zone, app.breakpoint);
    render_card(f, card, app, &theme);
    render_footer(f, footer, app);
}

/// Backdrop rows: the slogan repeated in the faint color
fn render_backdrop(f: &mut Frame, area: Rect, theme: &Theme) {
    let unit = format!("{}   ", WORKS_BACKDROP);
    let repeat = (area.width as usize / unit.chars().count().max(1)) + 1;
    let row: String = unit.repeat(repeat);
    let style = Style::default().fg(theme.faint).bg(theme.fg);
    let lines: Vec<Line> = (0..area.height)
        .map(|i| {
            if i % 3 == 1 {
                Line::styled(row.clone(), style)
            } else {
                Line::raw("")
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines).style(theme.inverse()), area);
}

/// Card size scales with the breakpoint, centered in the zone
fn card_rect(zone: Rect, breakpoint: Breakpoint) -> Rect {
    let (margin_x, margin_y) = match breakpoint {
        Breakpoint::Compact => (1, 1),
        Breakpoint::Normal => (4, 2),
        Breakpoint::Wide => (10, 3),
    };
    let width = zone.width.saturating_sub(margin_x * 2);
    let height = zone.height.saturating_sub(margin_y * 2).min(16);
    let x = zone.x + (zone.width - width) / 2;
    let y = zone.y + (zone.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn render_card(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let project = app.works.current();
    let hovered = app.is_hovered(Target::WorksCard);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .style(theme.base())
        .title(
            Line::from(format!(" {}/{} ", app.works.index() + 1, PROJECTS.len()))
                .right_aligned(),
        );

    f.render_widget(Clear, area);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(card_lines(project, theme, hovered)).wrap(Wrap { trim: true }),
        inner.inner(Margin::new(2, 1)),
    );
    app.hit_map.register(area, Target::WorksCard);
}

fn card_lines(project: &Project, theme: &Theme, hovered: bool) -> Vec<Line<'static>> {
    let title_style = Theme::hovered(theme.bold(), hovered);
    vec![
        Line::styled(project.category, theme.base().add_modifier(Modifier::ITALIC)),
        Line::raw(""),
        Line::styled(project.title, title_style),
        Line::raw(""),
        Line::styled(project.description, theme.base().fg(theme.muted)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("↵ ", theme.base().fg(theme.muted)),
            Span::styled(project.url, theme.base().fg(theme.muted)),
        ]),
    ]
}

/// ← → buttons, right-aligned
fn render_footer(f: &mut Frame, area: Rect, app: &mut App) {
    let width = 5;
    let y = area.y + area.height.saturating_sub(1) / 2;
    let next = Rect::new(area.right().saturating_sub(width + 2), y, width, 1);
    let prev = Rect::new(next.x.saturating_sub(width + 2), y, width, 1);

    // Page colors so the buttons stand out on the inverse panel
    let theme = app.theme.clone();
    for (rect, label, target) in [(prev, "←", Target::WorksPrev), (next, "→", Target::WorksNext)] {
        let style = Theme::hovered(theme.base(), app.is_hovered(target));
        f.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            rect.intersection(area),
        );
        app.hit_map.register(rect.intersection(area), target);
    }
}
