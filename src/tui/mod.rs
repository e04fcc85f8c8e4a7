// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, resize, frame ticks, timer messages)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod links;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::navigator::Section;
use anyhow::{Context, Result};
use app::{App, AppMessage, TerminalSize};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not the loop succeeded.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let setup = if config.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };
    if let Err(e) = setup {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let result = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let result = run_app(&mut terminal, &config, log_buffer).await;
            let _ = terminal.show_cursor();
            result
        }
        Err(e) => Err(e).context("Failed to create terminal"),
    };

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    let mut stdout = io::stdout();
    if config.mouse_enabled {
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(stdout, LeaveAlternateScreen)
    }
    .context("Failed to restore terminal")?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    let (message_tx, mut message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, log_buffer, message_tx, terminal_size()?);
    run_event_loop(
        terminal,
        &mut app,
        &mut message_rx,
        Duration::from_millis(config.frame_ms),
    )
    .await
}

/// Current terminal size including pixel dimensions when available
fn terminal_size() -> Result<TerminalSize> {
    match crossterm::terminal::window_size() {
        Ok(size) => Ok(TerminalSize {
            columns: size.columns,
            rows: size.rows,
            pixel_width: size.width,
            pixel_height: size.height,
        }),
        Err(_) => {
            let (columns, rows) =
                crossterm::terminal::size().context("Failed to query terminal size")?;
            Ok(TerminalSize::cells(columns, rows))
        }
    }
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, mouse, resize)
/// 2. Frame ticks (cursor spring, cooldown expiry, toast expiry)
/// 3. Messages from section-scoped timers
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    message_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    frame: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(frame);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard, mouse or resize
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(columns, rows)) => {
                            let size = terminal_size()
                                .unwrap_or_else(|_| TerminalSize::cells(columns, rows));
                            app.on_resize(size);
                        }
                        Ok(_) => {}
                        Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Quit requested");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Menu → Global → Section
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Ctrl+C always quits, even under a modal
    if key_event.kind == KeyEventKind::Press
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    if handle_modal_input(app, &key_event) {
        return;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }
    let now = Instant::now();

    if app.state().menu_open && handle_menu_keys(app, key, now) {
        return;
    }

    if handle_global_keys(app, key, now) {
        return;
    }

    handle_section_keys(app, key, now);
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let action = modal.handle_input(key_event.code);
    match action {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::ScrollUp | ModalAction::ScrollDown => {
            let available = app.log_buffer.len();
            modal.scroll(&action, available);
        }
    }

    true
}

/// Keys while the menu overlay is open - returns true if handled
fn handle_menu_keys(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.menu_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.menu_move(1),
        KeyCode::Enter => {
            let section = app.menu_cursor;
            app.select_section(section, now);
        }
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(now),
        _ => return false,
    }
    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of the active section
fn handle_global_keys(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('m') => app.toggle_menu(now),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('L') => app.modal = Some(Modal::logs()),
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(section) = Section::from_index(index) {
                app.select_section(section, now);
            }
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
            app.step_forward(now);
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
            app.step_backward(now);
        }
        _ => return false,
    }
    true
}

/// Keys that only mean something in the active section
fn handle_section_keys(app: &mut App, key: KeyCode, _now: Instant) {
    match app.active() {
        Section::Home => {}
        Section::Works => match key {
            KeyCode::Left | KeyCode::Char('h') => app.works.prev(),
            KeyCode::Right | KeyCode::Char('l') => app.works.next(),
            KeyCode::Enter => app.open_current_project(),
            _ => {}
        },
        Section::Contact => match key {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.contact_move(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.contact_move(1),
            KeyCode::Enter => app.open_contact_link(app.contact_cursor),
            KeyCode::Char('y') => app.copy_contact_link(app.contact_cursor),
            _ => {}
        },
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let now = Instant::now();
    let (column, row) = (mouse_event.column, mouse_event.row);

    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.on_pointer(column, row),
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_none() {
                app.on_click(column, row, now);
            }
        }
        MouseEventKind::ScrollDown => scroll(app, 1.0, now),
        MouseEventKind::ScrollUp => scroll(app, -1.0, now),
        _ => {}
    }
}

fn scroll(app: &mut App, notches: f64, now: Instant) {
    // Wheel over the log modal scrolls the log
    if let Some(ref mut modal) = app.modal {
        let action = if notches > 0.0 {
            ModalAction::ScrollDown
        } else {
            ModalAction::ScrollUp
        };
        let available = app.log_buffer.len();
        modal.scroll(&action, available);
        return;
    }
    app.on_wheel(notches, now);
}
