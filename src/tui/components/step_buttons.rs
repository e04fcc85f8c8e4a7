// Step buttons - ↑/↓ controls on compact terminals
//
// Stand-in for the cursor dot when there is no room for it. Each button
// steps one section without going through the wheel cooldown.

use super::render_button;
use crate::tui::app::App;
use crate::tui::hit_test::Target;
use ratatui::{layout::Rect, Frame};

const BUTTON_WIDTH: u16 = 3;
const BUTTON_HEIGHT: u16 = 1;

/// Two stacked buttons, vertically centered on the right edge
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let (up, down) = button_rects(area);
    render_button(f, app, up, "↑", Target::StepBackward);
    render_button(f, app, down, "↓", Target::StepForward);
}

fn button_rects(area: Rect) -> (Rect, Rect) {
    let x = area.right().saturating_sub(BUTTON_WIDTH + 1).max(area.x);
    let middle = area.y + area.height / 2;
    let up = Rect::new(x, middle.saturating_sub(BUTTON_HEIGHT + 1), BUTTON_WIDTH, BUTTON_HEIGHT);
    let down = Rect::new(x, middle + 1, BUTTON_WIDTH, BUTTON_HEIGHT);
    (up.intersection(area), down.intersection(area))
}
