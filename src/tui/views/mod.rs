// Views module - screen-level rendering
//
// Exactly one section view fills the screen. Chrome, the compact step
// buttons, the menu overlay, the cursor dot, modals and toasts stack on top
// in that order. Hit regions are rebuilt on every draw.

mod contact;
mod home;
mod menu;
mod modal;
mod works;

use super::app::App;
use super::components::{chrome, cursor_dot, step_buttons};
use crate::navigator::Section;
use ratatui::widgets::Block;
use ratatui::Frame;
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let now = Instant::now();
    let area = f.area();
    app.hit_map.clear();

    f.render_widget(Block::default().style(app.theme.base()), area);

    match app.active() {
        Section::Home => home::render(f, area, app),
        Section::Works => works::render(f, area, app),
        Section::Contact => contact::render(f, area, app),
    }

    if app.chrome_visible() {
        chrome::render_header(f, area, app);
        chrome::render_theme_toggle(f, area, app);
    }

    if app.breakpoint.shows_step_buttons() {
        step_buttons::render(f, area, app);
    }

    if app.state().menu_open {
        menu::render(f, area, app, now);
    }

    cursor_dot::render(f, app);

    // Modals take all input, so nothing underneath is hoverable
    if let Some(modal_state) = app.modal.take() {
        app.hit_map.clear();
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, area, &app.theme);
    }
}
