// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// The navigation menu is not a modal: its open state belongs to the navigator.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Scroll toward older entries
    ScrollUp,
    /// Scroll toward newer entries
    ScrollDown,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Recent log entries; `offset` counts lines scrolled back from the newest
    Logs { offset: usize },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn logs() -> Self {
        Modal::Logs { offset: 0 }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs { .. } => match key {
                KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                _ => ModalAction::None,
            },
        }
    }

    /// Apply a scroll action, bounded by the number of entries available
    pub fn scroll(&mut self, action: &ModalAction, available: usize) {
        if let Modal::Logs { offset } = self {
            match action {
                ModalAction::ScrollUp => *offset = (*offset + 1).min(available.saturating_sub(1)),
                ModalAction::ScrollDown => *offset = offset.saturating_sub(1),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_closes_on_toggle_key() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn test_log_scroll_is_bounded() {
        let mut modal = Modal::logs();
        let up = modal.handle_input(KeyCode::Up);
        assert_eq!(up, ModalAction::ScrollUp);

        for _ in 0..10 {
            modal.scroll(&up, 3);
        }
        assert_eq!(modal, Modal::Logs { offset: 2 });

        for _ in 0..10 {
            modal.scroll(&ModalAction::ScrollDown, 3);
        }
        assert_eq!(modal, Modal::Logs { offset: 0 });
    }
}
