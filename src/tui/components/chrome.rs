// Chrome - header mark and theme toggle
//
// Shown only while `NavigationState::chrome_visible` holds.

use super::{button_width, render_button};
use crate::content::OWNER_MARK;
use crate::tui::app::App;
use crate::tui::hit_test::Target;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, Frame};

const THEME_LABEL: &str = "Toggle Theme";
const THEME_LABEL_SHORT: &str = "Theme";

/// Header mark centered at the top; opens the menu
pub fn render_header(f: &mut Frame, area: Rect, app: &mut App) {
    let width = button_width(OWNER_MARK, 3).min(area.width);
    let height = 3.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let rect = Rect::new(x, area.y, width, height);
    render_button(f, app, rect, OWNER_MARK, Target::MenuButton);
}

/// Theme toggle anchored bottom-right
pub fn render_theme_toggle(f: &mut Frame, area: Rect, app: &mut App) {
    let label = if app.breakpoint.at_least(Breakpoint::Normal) {
        THEME_LABEL
    } else {
        THEME_LABEL_SHORT
    };
    let rect = theme_toggle_rect(area, label);
    render_button(f, app, rect, label, Target::ThemeToggle);
}

fn theme_toggle_rect(area: Rect, label: &str) -> Rect {
    let width = button_width(label, 2).min(area.width);
    let height = 3.min(area.height);
    let x = area.right().saturating_sub(width + 2).max(area.x);
    let y = area.bottom().saturating_sub(height + 1).max(area.y);
    Rect::new(x, y, width, height)
}
