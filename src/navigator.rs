// Section navigator - the only stateful decision-maker of the landing view
//
// Interprets wheel deltas, menu selections and prev/next controls as
// transitions over the fixed section sequence. Wheel input is accumulated
// against a threshold and gated by a cooldown after every committed wheel
// transition; menu and button navigation bypass both.
//
// Time is passed in explicitly so the cooldown is deterministic under test.
// The event loop calls `release_lock` every frame, which is the scheduled
// unlock of the cooldown.

use crate::config::NavigationConfig;
use std::time::{Duration, Instant};

/// One of the fixed navigable views, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Works,
    Contact,
}

impl Section {
    /// All sections in adjacency order
    pub const ALL: [Section; 3] = [Section::Home, Section::Works, Section::Contact];

    /// Position in the navigation sequence
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Works => 1,
            Section::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase identifier used in logs and config
    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Works => "works",
            Section::Contact => "contact",
        }
    }

    /// Display title for the menu
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Works => "Works",
            Section::Contact => "Contact",
        }
    }

    /// Neighbour in the given direction, `None` past either end (no wraparound)
    fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Forward => Self::from_index(self.index() + 1),
            Direction::Backward => self.index().checked_sub(1).and_then(Self::from_index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Snapshot of everything the view layer needs to make rendering decisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub active: Section,
    /// Section shown immediately before `active`; `None` until the first transition
    pub previous: Option<Section>,
    pub menu_open: bool,
    /// Sum of |deltaY| since the last commit or reset
    pub scroll_accumulator: f64,
    /// Blocks wheel-driven commits during the cooldown window
    pub transition_locked: bool,
}

impl NavigationState {
    /// Header and theme toggle are hidden while contact is either side of the transition
    pub fn chrome_visible(&self) -> bool {
        self.active != Section::Contact && self.previous != Some(Section::Contact)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            previous: None,
            menu_open: false,
            scroll_accumulator: 0.0,
            transition_locked: false,
        }
    }
}

/// What a wheel delta did to the navigation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Cooldown still running, delta dropped
    Locked,
    /// Below threshold, delta banked in the accumulator
    Accumulating,
    /// Threshold reached at a boundary; gesture consumed without moving
    Absorbed,
    /// Transition committed and cooldown started
    Committed { from: Section, to: Section },
    /// Non-finite delta, ignored
    Ignored,
}

/// Tunables for wheel handling
#[derive(Debug, Clone, Copy)]
pub struct NavigatorSettings {
    pub wheel_threshold: f64,
    pub cooldown: Duration,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            wheel_threshold: 100.0,
            cooldown: Duration::from_millis(1000),
        }
    }
}

impl From<&NavigationConfig> for NavigatorSettings {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            wheel_threshold: config.wheel_threshold,
            cooldown: Duration::from_millis(config.cooldown_ms),
        }
    }
}

/// Owns `NavigationState` and is the only thing that mutates it
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    state: NavigationState,
    settings: NavigatorSettings,
    /// When the running cooldown ends
    unlock_at: Option<Instant>,
}

impl SectionNavigator {
    pub fn new(settings: NavigatorSettings) -> Self {
        Self {
            state: NavigationState::default(),
            settings,
            unlock_at: None,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active(&self) -> Section {
        self.state.active
    }

    /// Clear the transition lock once its cooldown has elapsed.
    /// Returns true if the lock was released by this call.
    pub fn release_lock(&mut self, now: Instant) -> bool {
        match self.unlock_at {
            Some(deadline) if now >= deadline => {
                self.unlock_at = None;
                self.state.transition_locked = false;
                tracing::trace!("wheel cooldown elapsed");
                true
            }
            _ => false,
        }
    }

    /// Feed one wheel delta (positive = forward)
    pub fn handle_wheel(&mut self, delta_y: f64, now: Instant) -> WheelOutcome {
        if !delta_y.is_finite() {
            return WheelOutcome::Ignored;
        }

        self.release_lock(now);
        if self.state.transition_locked {
            return WheelOutcome::Locked;
        }

        self.state.scroll_accumulator += delta_y.abs();
        if self.state.scroll_accumulator < self.settings.wheel_threshold {
            return WheelOutcome::Accumulating;
        }

        // Reaching the threshold always consumes the gesture, even at a boundary,
        // so overscroll never banks progress toward a later transition.
        self.state.scroll_accumulator = 0.0;

        let direction = if delta_y > 0.0 {
            Direction::Forward
        } else if delta_y < 0.0 {
            Direction::Backward
        } else {
            return WheelOutcome::Absorbed;
        };

        let from = self.state.active;
        match from.step(direction) {
            Some(to) => {
                self.commit(to);
                self.state.transition_locked = true;
                self.unlock_at = Some(now + self.settings.cooldown);
                tracing::debug!(from = from.name(), to = to.name(), "wheel transition");
                WheelOutcome::Committed { from, to }
            }
            None => {
                tracing::trace!(at = from.name(), "wheel overscroll absorbed");
                WheelOutcome::Absorbed
            }
        }
    }

    /// Jump straight to a section and close the menu.
    /// Ignores the wheel cooldown: explicit choice wins over debouncing.
    pub fn select_section(&mut self, section: Section) {
        tracing::debug!(
            from = self.state.active.name(),
            to = section.name(),
            "menu selection"
        );
        self.commit(section);
        self.state.menu_open = false;
    }

    /// Move one section forward; no-op at `contact`
    pub fn step_forward(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    /// Move one section back; no-op at `home`
    pub fn step_backward(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(open = self.state.menu_open, "menu toggled");
    }

    fn step(&mut self, direction: Direction) -> bool {
        let Some(to) = self.state.active.step(direction) else {
            return false;
        };
        tracing::debug!(from = self.state.active.name(), to = to.name(), "step");
        self.state.previous = Some(self.state.active);
        self.state.active = to;
        true
    }

    fn commit(&mut self, to: Section) {
        self.state.previous = Some(self.state.active);
        self.state.active = to;
        self.state.scroll_accumulator = 0.0;
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(NavigatorSettings::default())
    }
}
