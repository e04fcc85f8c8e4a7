// Hover intent - one shared signal for "pointer is over something clickable"
//
// The pointer handler writes it from the hit test; the mounted cursor dot
// holds a clone and reads its size from it, so there is no per-component
// copy that can drift out of sync.

use std::cell::Cell;
use std::rc::Rc;

/// Shared hover flag. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct HoverIntent(Rc<Cell<bool>>);

impl HoverIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set from a hit test; returns true if the value changed
    pub fn set(&self, hovering: bool) -> bool {
        self.0.replace(hovering) != hovering
    }

    pub fn is_hovering(&self) -> bool {
        self.0.get()
    }
}

/// The two cursor dot sizes, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSizes {
    pub normal: f64,
    pub enlarged: f64,
}

impl DotSizes {
    pub fn current(&self, hover: &HoverIntent) -> f64 {
        if hover.is_hovering() {
            self.enlarged
        } else {
            self.normal
        }
    }
}

impl Default for DotSizes {
    fn default() -> Self {
        Self {
            normal: 20.0,
            enlarged: 35.0,
        }
    }
}
