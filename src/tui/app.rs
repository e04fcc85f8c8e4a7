// TUI application state
//
// Owns the navigator, both input trackers, the theme and per-section view
// state. Event handlers in `tui::mod` translate terminal input into calls on
// this type; views only read it (apart from registering hit regions).

use super::clipboard;
use super::components::toast::Toast;
use super::hit_test::{HitMap, Target};
use super::input::InputHandler;
use super::layout::Breakpoint;
use super::links;
use super::modal::Modal;
use super::theme::Theme;
use crate::config::Config;
use crate::content::{RotatingText, WorksCarousel, CONTACT_LINKS};
use crate::hover::{DotSizes, HoverIntent};
use crate::logging::LogBuffer;
use crate::navigator::{NavigationState, NavigatorSettings, Section, SectionNavigator, WheelOutcome};
use crate::theme::ThemeController;
use crate::ticker::ScopedInterval;
use crate::tracker::{
    FontScale, InputTracker, Point, PointerSpring, Subscription, TextScale, Viewport,
};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Menu slide-in duration
pub const MENU_SLIDE: Duration = Duration::from_millis(600);

/// Messages posted into the event loop by background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// Contact section's word rotation timer fired
    RotateAbout,
}

/// Terminal size as reported by crossterm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
    /// 0 when the terminal doesn't report pixels
    pub pixel_width: u16,
    pub pixel_height: u16,
}

impl TerminalSize {
    pub fn cells(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }
}

/// The mounted cursor dot: its pointer registration and its handle on the
/// hover signal written by `App::on_pointer`
struct CursorDotMount {
    position: Subscription<Point>,
    hover: HoverIntent,
}

/// Main application state for the TUI
pub struct App {
    pub navigator: SectionNavigator,
    theme_controller: ThemeController,
    /// Palette for the current mode
    pub theme: Theme,

    pointer: InputTracker<PointerSpring>,
    viewport: InputTracker<FontScale>,
    /// `None` while the dot isn't mounted
    cursor_dot: Option<CursorDotMount>,
    font_size: Subscription<f64>,

    pub hover: HoverIntent,
    /// Element under the pointer, for per-element underline
    pub hovered: Option<Target>,
    pub dot_sizes: DotSizes,

    pub works: WorksCarousel,
    pub about: RotatingText,
    about_timer: Option<ScopedInterval>,
    rotate_interval: Duration,
    /// Selected contact link
    pub contact_cursor: usize,

    /// Highlighted menu entry
    pub menu_cursor: Section,
    menu_opened_at: Option<Instant>,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub hit_map: HitMap,
    pub breakpoint: Breakpoint,

    input_handler: InputHandler,
    pub log_buffer: LogBuffer,
    messages: mpsc::UnboundedSender<AppMessage>,

    pub should_quit: bool,
    last_frame: Instant,

    wheel_delta: f64,
    cursor_enabled: bool,
    cell_width_px: f64,
    cell_height_px: f64,
}

impl App {
    /// Mount the app. Must run inside a tokio runtime (section timers are tasks).
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        messages: mpsc::UnboundedSender<AppMessage>,
        size: TerminalSize,
    ) -> Self {
        let theme_controller = ThemeController::new(config.theme);
        let typography = &config.typography;

        let initial_viewport = Viewport::measure(
            size.columns,
            size.rows,
            size.pixel_width,
            size.pixel_height,
            typography.cell_width_px,
            typography.cell_height_px,
        );
        let viewport = InputTracker::new(
            FontScale::new(typography.min_font_size, typography.max_font_size),
            initial_viewport,
        );
        let font_size = viewport.subscribe();

        let mut app = Self {
            navigator: SectionNavigator::new(NavigatorSettings::from(&config.navigation)),
            theme: Theme::for_mode(theme_controller.mode()),
            theme_controller,
            pointer: InputTracker::new(PointerSpring::new(config.cursor.stiffness), None),
            viewport,
            cursor_dot: None,
            font_size,
            hover: HoverIntent::new(),
            hovered: None,
            dot_sizes: DotSizes {
                normal: config.cursor.normal_dot_size,
                enlarged: config.cursor.enlarged_dot_size,
            },
            works: WorksCarousel::default(),
            about: RotatingText::default(),
            about_timer: None,
            rotate_interval: Duration::from_millis(config.contact.rotate_interval_ms),
            contact_cursor: 0,
            menu_cursor: Section::Home,
            menu_opened_at: None,
            modal: None,
            toast: None,
            hit_map: HitMap::default(),
            breakpoint: Breakpoint::from_width(size.columns),
            input_handler: InputHandler::with_default_config(),
            log_buffer,
            messages,
            should_quit: false,
            last_frame: Instant::now(),
            wheel_delta: config.navigation.wheel_delta_per_notch,
            cursor_enabled: config.cursor.enabled && config.mouse_enabled,
            cell_width_px: typography.cell_width_px,
            cell_height_px: typography.cell_height_px,
        };
        app.sync_cursor_mount();

        tracing::info!(
            theme = app.theme_controller.mode().as_str(),
            font_size = app.font_size(),
            columns = size.columns,
            rows = size.rows,
            "mounted"
        );
        app
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read side (views)
    // ─────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn active(&self) -> Section {
        self.navigator.active()
    }

    pub fn chrome_visible(&self) -> bool {
        self.navigator.state().chrome_visible()
    }

    pub fn is_dark(&self) -> bool {
        self.theme_controller.is_dark()
    }

    /// Current clamped font size
    pub fn font_size(&self) -> f64 {
        self.font_size.get()
    }

    pub fn text_scale(&self) -> TextScale {
        TextScale::from_font_size(self.font_size())
    }

    /// Smoothed cursor position and dot size, when the dot is mounted and
    /// the pointer has been seen
    pub fn cursor_dot(&self) -> Option<(Point, f64)> {
        let mount = self.cursor_dot.as_ref()?;
        if !self.pointer.derivation().has_pointer() {
            return None;
        }
        Some((mount.position.get(), self.dot_sizes.current(&mount.hover)))
    }

    pub fn is_hovered(&self, target: Target) -> bool {
        self.hovered == Some(target)
    }

    /// Menu slide progress in 0.0..=1.0
    pub fn menu_slide(&self, now: Instant) -> f64 {
        match self.menu_opened_at {
            Some(opened) => {
                let elapsed = now.saturating_duration_since(opened).as_secs_f64();
                (elapsed / MENU_SLIDE.as_secs_f64()).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }

    pub fn about_rotating(&self) -> bool {
        self.about_timer
            .as_ref()
            .is_some_and(ScopedInterval::is_running)
    }

    /// Nominal cell size in pixels, for converting dot sizes to cells
    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width_px, self.cell_height_px)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Raw input
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// One wheel notch; positive is forward (down)
    pub fn on_wheel(&mut self, notches: f64, now: Instant) -> WheelOutcome {
        let before = *self.navigator.state();
        let outcome = self.navigator.handle_wheel(notches * self.wheel_delta, now);
        self.after_navigation(before, now);
        outcome
    }

    /// Pointer moved over a cell
    pub fn on_pointer(&mut self, column: u16, row: u16) {
        self.pointer
            .sample(Some(Point::new(f64::from(column), f64::from(row))));
        self.hovered = self.hit_map.target_at(column, row);
        if self.hover.set(self.hovered.is_some()) {
            tracing::trace!(hovering = self.hover.is_hovering(), "hover changed");
        }
    }

    /// Left click
    pub fn on_click(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(target) = self.hit_map.target_at(column, row) {
            self.activate(target, now);
        }
    }

    pub fn on_resize(&mut self, size: TerminalSize) {
        let viewport = Viewport::measure(
            size.columns,
            size.rows,
            size.pixel_width,
            size.pixel_height,
            self.cell_width_px,
            self.cell_height_px,
        );
        self.viewport.sample(viewport);
        if self.font_size.has_changed() {
            self.font_size.mark_seen();
            tracing::debug!(font_size = self.font_size(), "font size changed");
        }
        self.breakpoint = Breakpoint::from_width(size.columns);
        self.sync_cursor_mount();
        tracing::debug!(columns = size.columns, rows = size.rows, "resized");
    }

    /// Per-frame housekeeping: cursor spring, cooldown expiry, toast expiry
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.pointer.tick(dt);
        self.navigator.release_lock(now);
        self.clear_expired_toast(now);
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::RotateAbout => {
                // A tick can already be queued when the section unmounts
                if self.about_rotating() {
                    self.about.advance();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    pub fn activate(&mut self, target: Target, now: Instant) {
        tracing::debug!(?target, "activate");
        match target {
            Target::MenuButton => self.toggle_menu(now),
            Target::ThemeToggle => self.toggle_theme(),
            Target::StepBackward => {
                self.step_backward(now);
            }
            Target::StepForward => {
                self.step_forward(now);
            }
            Target::MenuItem(section) => self.select_section(section, now),
            Target::MenuClose => {
                if self.state().menu_open {
                    self.toggle_menu(now);
                }
            }
            Target::WorksPrev => self.works.prev(),
            Target::WorksNext => self.works.next(),
            Target::WorksCard => self.open_current_project(),
            Target::ContactLink(index) => {
                self.contact_cursor = index;
                self.open_contact_link(index);
            }
        }
    }

    pub fn select_section(&mut self, section: Section, now: Instant) {
        let before = *self.navigator.state();
        self.navigator.select_section(section);
        self.after_navigation(before, now);
    }

    pub fn step_forward(&mut self, now: Instant) -> bool {
        let before = *self.navigator.state();
        let moved = self.navigator.step_forward();
        self.after_navigation(before, now);
        moved
    }

    pub fn step_backward(&mut self, now: Instant) -> bool {
        let before = *self.navigator.state();
        let moved = self.navigator.step_backward();
        self.after_navigation(before, now);
        moved
    }

    pub fn toggle_menu(&mut self, now: Instant) {
        let before = *self.navigator.state();
        self.navigator.toggle_menu();
        self.after_navigation(before, now);
    }

    pub fn toggle_theme(&mut self) {
        self.theme_controller.toggle();
        self.theme = Theme::for_mode(self.theme_controller.mode());
        tracing::info!(dark = self.is_dark(), "theme changed");
    }

    /// Move the menu highlight, clamped to the section list
    pub fn menu_move(&mut self, delta: isize) {
        let index = self.menu_cursor.index() as isize + delta;
        let clamped = index.clamp(0, Section::ALL.len() as isize - 1) as usize;
        if let Some(section) = Section::from_index(clamped) {
            self.menu_cursor = section;
        }
    }

    /// Move the contact link selection, wrapping
    pub fn contact_move(&mut self, delta: isize) {
        let len = CONTACT_LINKS.len() as isize;
        self.contact_cursor = (self.contact_cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn open_current_project(&mut self) {
        let project = self.works.current();
        match links::open_link(project.url) {
            Ok(()) => self.show_toast(format!("Opening {}", project.title)),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to open link");
            }
        }
    }

    pub fn open_contact_link(&mut self, index: usize) {
        let Some(link) = CONTACT_LINKS.get(index) else {
            return;
        };
        match links::open_link(link.href) {
            Ok(()) => self.show_toast(format!("Opening {}", link.name)),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to open link");
            }
        }
    }

    pub fn copy_contact_link(&mut self, index: usize) {
        let Some(link) = CONTACT_LINKS.get(index) else {
            return;
        };
        match clipboard::copy_to_clipboard(clipboard::copy_text(link.href)) {
            Ok(()) => self.show_toast(format!("✓ Copied {}", link.name)),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mount bookkeeping
    // ─────────────────────────────────────────────────────────────────────

    /// Mount or unmount section-scoped resources after a navigator call
    fn after_navigation(&mut self, before: NavigationState, now: Instant) {
        let after = *self.navigator.state();

        if after.active != before.active {
            tracing::info!(
                from = before.active.name(),
                to = after.active.name(),
                "section changed"
            );
        }

        // Contact's rotating word runs only while contact is on screen
        match (after.active == Section::Contact, self.about_timer.is_some()) {
            (true, false) => {
                self.about.reset();
                let tx = self.messages.clone();
                self.about_timer = Some(ScopedInterval::spawn(self.rotate_interval, tx, || {
                    AppMessage::RotateAbout
                }));
            }
            (false, true) => self.about_timer = None,
            _ => {}
        }

        if after.menu_open && !before.menu_open {
            self.menu_cursor = after.active;
            self.menu_opened_at = Some(now);
        } else if !after.menu_open {
            self.menu_opened_at = None;
        }
    }

    /// The dot is mounted on non-compact terminals with the mouse captured
    fn sync_cursor_mount(&mut self) {
        let wanted = self.cursor_enabled && !self.breakpoint.shows_step_buttons();
        match (wanted, self.cursor_dot.is_some()) {
            (true, false) => {
                // Samples were dropped while unmounted; start from the next one
                self.pointer.derivation_mut().forget();
                self.cursor_dot = Some(CursorDotMount {
                    position: self.pointer.subscribe(),
                    hover: self.hover.clone(),
                });
            }
            (false, true) => self.cursor_dot = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn app_with(config: &Config, size: TerminalSize) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(config, LogBuffer::new(), tx, size), rx)
    }

    fn app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        app_with(&Config::default(), TerminalSize::cells(120, 40))
    }

    #[tokio::test]
    async fn test_mount_defaults() {
        let (app, _rx) = app();
        assert_eq!(app.active(), Section::Home);
        assert!(app.is_dark());
        assert!(app.chrome_visible());
        assert!(!app.about_rotating());
        // 120x40 cells at 8x16 px: min(960/25, 640/12) = 38.4
        assert!((app.font_size() - 38.4).abs() < 1e-9);
        assert_eq!(app.text_scale(), TextScale::Plain);
    }

    #[tokio::test]
    async fn test_wheel_notches_accumulate_to_threshold() {
        let (mut app, _rx) = app();
        let t0 = Instant::now();

        // 40 per notch, threshold 100: third notch commits
        assert_eq!(app.on_wheel(1.0, t0), WheelOutcome::Accumulating);
        assert_eq!(app.on_wheel(1.0, t0), WheelOutcome::Accumulating);
        assert_eq!(
            app.on_wheel(1.0, t0),
            WheelOutcome::Committed {
                from: Section::Home,
                to: Section::Works
            }
        );
        assert_eq!(app.on_wheel(1.0, t0), WheelOutcome::Locked);

        app.tick(t0 + Duration::from_millis(1000));
        assert!(!app.state().transition_locked);
    }

    #[tokio::test]
    async fn test_contact_mounts_rotation_timer() {
        let (mut app, _rx) = app();
        let now = Instant::now();

        app.select_section(Section::Contact, now);
        assert!(app.about_rotating());
        assert!(!app.chrome_visible());

        app.handle_message(AppMessage::RotateAbout);
        assert_eq!(app.about.current(), crate::content::ABOUT_WORDS[1]);

        app.step_backward(now);
        assert_eq!(app.active(), Section::Works);
        assert!(!app.about_rotating());
        // Chrome stays hidden while contact was the previous section
        assert!(!app.chrome_visible());

        // A late tick after unmount is dropped
        app.handle_message(AppMessage::RotateAbout);
        assert_eq!(app.about.current(), crate::content::ABOUT_WORDS[1]);

        // Remount restarts from the first word
        app.select_section(Section::Contact, now);
        assert_eq!(app.about.current(), crate::content::ABOUT_WORDS[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotation_timer_posts_messages() {
        let (mut app, mut rx) = app();
        app.select_section(Section::Contact, Instant::now());

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert_eq!(rx.try_recv().ok(), Some(AppMessage::RotateAbout));
    }

    #[tokio::test]
    async fn test_menu_open_and_select() {
        let (mut app, _rx) = app();
        let now = Instant::now();
        app.step_forward(now);

        app.toggle_menu(now);
        assert!(app.state().menu_open);
        assert_eq!(app.menu_cursor, Section::Works);
        assert_eq!(app.menu_slide(now), 0.0);
        assert_eq!(app.menu_slide(now + MENU_SLIDE), 1.0);

        app.menu_move(5);
        assert_eq!(app.menu_cursor, Section::Contact);
        app.menu_move(-1);
        assert_eq!(app.menu_cursor, Section::Works);

        app.activate(Target::MenuItem(Section::Home), now);
        assert!(!app.state().menu_open);
        assert_eq!(app.active(), Section::Home);
        assert_eq!(app.state().previous, Some(Section::Works));
    }

    #[tokio::test]
    async fn test_menu_close_target_only_closes() {
        let (mut app, _rx) = app();
        let now = Instant::now();
        app.activate(Target::MenuClose, now);
        assert!(!app.state().menu_open);
        app.activate(Target::MenuButton, now);
        assert!(app.state().menu_open);
        app.activate(Target::MenuClose, now);
        assert!(!app.state().menu_open);
    }

    #[tokio::test]
    async fn test_theme_toggle_swaps_palette() {
        let (mut app, _rx) = app();
        app.activate(Target::ThemeToggle, Instant::now());
        assert!(!app.is_dark());
        assert_eq!(app.theme.bg, Theme::for_mode(ThemeMode::Light).bg);
    }

    #[tokio::test]
    async fn test_hover_drives_dot_size() {
        let (mut app, _rx) = app();
        assert_eq!(app.cursor_dot(), None);

        app.hit_map
            .register(ratatui::layout::Rect::new(50, 0, 10, 3), Target::MenuButton);

        app.on_pointer(10, 10);
        let (_, size) = app.cursor_dot().expect("dot mounted");
        assert_eq!(size, 20.0);

        app.on_pointer(55, 1);
        assert!(app.hover.is_hovering());
        assert!(app.is_hovered(Target::MenuButton));
        let (_, size) = app.cursor_dot().expect("dot mounted");
        assert_eq!(size, 35.0);

        app.on_pointer(10, 10);
        assert!(!app.hover.is_hovering());
    }

    #[tokio::test]
    async fn test_pointer_is_smoothed() {
        let (mut app, _rx) = app();
        let t0 = Instant::now();
        app.tick(t0);

        app.on_pointer(10, 10);
        app.on_pointer(60, 10);
        let (p, _) = app.cursor_dot().expect("dot mounted");
        assert_eq!(p.x, 10.0);

        app.tick(t0 + Duration::from_millis(33));
        let (p, _) = app.cursor_dot().expect("dot mounted");
        assert!(p.x > 10.0 && p.x < 60.0);
    }

    #[tokio::test]
    async fn test_compact_unmounts_cursor_dot() {
        let (mut app, _rx) = app();
        assert_eq!(app.pointer.listener_count(), 1);

        app.on_resize(TerminalSize::cells(50, 30));
        assert_eq!(app.breakpoint, Breakpoint::Compact);
        assert_eq!(app.pointer.listener_count(), 0);
        app.on_pointer(5, 5);
        assert_eq!(app.cursor_dot(), None);

        app.on_resize(TerminalSize::cells(120, 40));
        assert_eq!(app.pointer.listener_count(), 1);
    }

    #[tokio::test]
    async fn test_remounted_dot_snaps_to_fresh_pointer() {
        let (mut app, _rx) = app();
        let t0 = Instant::now();
        app.tick(t0);
        app.on_pointer(10, 10);

        app.on_resize(TerminalSize::cells(50, 30));
        app.on_pointer(40, 20);
        app.on_resize(TerminalSize::cells(120, 40));

        // Nothing stale to show until the pointer moves again
        assert_eq!(app.cursor_dot(), None);

        app.on_pointer(90, 30);
        let (p, _) = app.cursor_dot().expect("dot mounted");
        assert_eq!(p, Point::new(90.0, 30.0));

        app.tick(t0 + Duration::from_millis(33));
        let (p, _) = app.cursor_dot().expect("dot mounted");
        assert_eq!(p, Point::new(90.0, 30.0));
    }

    #[tokio::test]
    async fn test_mouse_disabled_never_mounts_dot() {
        let mut config = Config::default();
        config.mouse_enabled = false;
        let (app, _rx) = app_with(&config, TerminalSize::cells(120, 40));
        assert_eq!(app.pointer.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_resize_recomputes_font() {
        let (mut app, _rx) = app();
        app.on_resize(TerminalSize {
            columns: 200,
            rows: 60,
            pixel_width: 2400,
            pixel_height: 1200,
        });
        // min(96, 100) clamped to 80
        assert_eq!(app.font_size(), 80.0);
        assert!(!app.font_size.has_changed());
        assert_eq!(app.text_scale(), TextScale::Banner);
    }

    #[tokio::test]
    async fn test_contact_cursor_wraps() {
        let (mut app, _rx) = app();
        app.contact_move(-1);
        assert_eq!(app.contact_cursor, CONTACT_LINKS.len() - 1);
        app.contact_move(1);
        assert_eq!(app.contact_cursor, 0);
    }

    #[tokio::test]
    async fn test_works_targets_cycle_carousel() {
        let (mut app, _rx) = app();
        let now = Instant::now();
        app.activate(Target::WorksPrev, now);
        assert_eq!(app.works.index(), 2);
        app.activate(Target::WorksNext, now);
        assert_eq!(app.works.index(), 0);
        // Carousel is independent of section navigation
        assert_eq!(app.active(), Section::Home);
    }
}
