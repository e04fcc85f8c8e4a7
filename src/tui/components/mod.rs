// Components module - reusable UI pieces shared by the section views
//
// Chrome (header mark, theme toggle), compact step buttons, the cursor dot
// and toasts. Interactive pieces register their area in the hit map as they
// draw.

pub mod chrome;
pub mod cursor_dot;
pub mod step_buttons;
pub mod toast;

use super::app::App;
use super::hit_test::Target;
use super::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Width of a padded button label
pub fn button_width(label: &str, padding: u16) -> u16 {
    label.width() as u16 + padding * 2
}

/// Inverse-colored text button, underlined while hovered
pub fn render_button(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    label: &str,
    target: Target,
) {
    let area = area.intersection(f.area());
    if area.is_empty() {
        return;
    }
    let style = Theme::hovered(app.theme.inverse(), app.is_hovered(target));
    let text = Paragraph::new(label).style(style).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(app.theme.inverse()), area);
    // Vertically center a one-line label in taller buttons
    let label_row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(text, label_row);
    app.hit_map.register(area, target);
}
