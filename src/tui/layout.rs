/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: phone-sized, step buttons instead of the cursor dot
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Compact terminals get on-screen step buttons
    pub fn shows_step_buttons(&self) -> bool {
        *self == Breakpoint::Compact
    }

    /// Columns in the contact link grid
    pub fn link_columns(&self) -> usize {
        match self {
            Breakpoint::Compact => 2,
            Breakpoint::Normal => 3,
            Breakpoint::Wide => 5,
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(300), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn compact_swaps_cursor_for_buttons() {
        assert!(Breakpoint::Compact.shows_step_buttons());
        assert!(!Breakpoint::Wide.shows_step_buttons());
        assert_eq!(Breakpoint::Compact.link_columns(), 2);
        assert_eq!(Breakpoint::Wide.link_columns(), 5);
    }
}
