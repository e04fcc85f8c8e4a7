// Key debouncing
//
// Terminals differ in whether they report key release and repeat events.
// This handler normalizes them into "should this press trigger an action":
// - State-change keys (menu, theme, select) trigger once per press
// - Repeatable keys (step, carousel, link cursor) trigger on press, then
//   repeat while held

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Without release events a held state-change key re-triggers after this
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press → release)
    StateChange,

    /// Trigger on press, then repeat after initial delay
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Section stepping repeats slowly; each repeat is a full transition
    pub fn stepping() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(250),
        }
    }

    /// Cursor movement inside a view
    pub fn cursor() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(80),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn release(&mut self) {
        *self = Self::default();
    }
}

/// Input handler that manages key behaviors
#[derive(Debug)]
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    pub fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let trigger = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if trigger {
            state.last_triggered = Some(now);
        }
        trigger
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::stepping(),
        );

        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
                KeyCode::Tab,
                KeyCode::BackTab,
            ],
            KeyBehavior::cursor(),
        );

        // Everything else (Enter, Esc, m, t, y, digits, ?, L, q) defaults
        // to StateChange
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('m'), t0));
        // Held: repeat events inside the debounce window don't trigger
        assert!(!handler.handle_key_press_at(KeyCode::Char('m'), t0 + ms(30)));
        assert!(!handler.handle_key_press_at(KeyCode::Char('m'), t0 + ms(100)));

        handler.handle_key_release(KeyCode::Char('m'));
        assert!(handler.handle_key_press_at(KeyCode::Char('m'), t0 + ms(110)));
    }

    #[test]
    fn test_state_change_debounce_without_release() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('t'), t0));
        // Terminal never reports release; a later press still goes through
        assert!(handler.handle_key_press_at(KeyCode::Char('t'), t0 + ms(200)));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Down, t0));
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + ms(100)));
        // Past the initial delay
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + ms(510)));
        // Within the repeat interval
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + ms(600)));
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + ms(770)));
    }
}
