// Menu overlay - full-screen section list sliding down from the top
//
// The overlay owns the screen while open: everything drawn beneath it is
// dropped from the hit map so clicks can't fall through.

use crate::navigator::Section;
use crate::tui::app::App;
use crate::tui::components::button_width;
use crate::tui::hit_test::Target;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const CLOSE_LABEL: &str = "close";
const ITEM_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    app.hit_map.clear();

    let overlay = slide_rect(area, ease_in_out(app.menu_slide(now)));
    if overlay.is_empty() {
        return;
    }
    let theme = app.theme.clone();
    f.render_widget(Clear, overlay);
    f.render_widget(Block::default().style(theme.inverse()), overlay);

    // Close button uses page colors so it reads as a button on the inverse sheet
    let close_width = button_width(CLOSE_LABEL, 4).min(overlay.width);
    let close = Rect::new(
        overlay.x + (overlay.width.saturating_sub(close_width)) / 2,
        overlay.y + 1,
        close_width,
        3,
    )
    .intersection(overlay);
    let close_style = Theme::hovered(theme.bold(), app.is_hovered(Target::MenuClose));
    f.render_widget(Block::default().style(close_style), close);
    f.render_widget(
        Paragraph::new(CLOSE_LABEL)
            .style(close_style)
            .alignment(Alignment::Center),
        Rect::new(close.x, close.y + close.height / 2, close.width, 1).intersection(overlay),
    );
    app.hit_map.register(close, Target::MenuClose);

    for section in Section::ALL {
        let rect = item_rect(overlay, section);
        if rect.is_empty() {
            continue;
        }
        let target = Target::MenuItem(section);
        let mut style = Theme::hovered(theme.inverse(), app.is_hovered(target));
        style = style.add_modifier(Modifier::BOLD);
        let label = if app.menu_cursor == section {
            format!("› {} ‹", section.title())
        } else {
            section.title().to_string()
        };
        f.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1),
        );
        app.hit_map.register(rect, target);
    }
}

/// Ease-in-out cubic
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// The overlay's visible part while sliding down from above the screen
fn slide_rect(area: Rect, progress: f64) -> Rect {
    let visible = (f64::from(area.height) * progress).round() as u16;
    Rect::new(area.x, area.y, area.width, visible.min(area.height))
}

/// Items are stacked around the vertical center of the full screen; during
/// the slide they follow the sheet's bottom edge
fn item_rect(overlay: Rect, section: Section) -> Rect {
    let count = Section::ALL.len() as u16;
    let block_height = count * ITEM_HEIGHT;
    let top = overlay.bottom().saturating_sub(overlay.height / 2 + block_height / 2);
    let width = 20.min(overlay.width);
    let x = overlay.x + (overlay.width - width) / 2;
    let y = top.max(overlay.y + 4) + section.index() as u16 * ITEM_HEIGHT;
    Rect::new(x, y, width, ITEM_HEIGHT).intersection(overlay)
}
