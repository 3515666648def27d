//! Before/after image comparison slider: a draggable handle that reveals
//! the "before" image up to the pointer's horizontal position.

use serde::{Deserialize, Serialize};

/// Handle position and clip width, as a percentage of container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPosition {
    /// Left offset of the handle, 0-100.
    pub handle_left_pct: f64,
    /// Width of the "before" layer, 0-100.
    pub before_width_pct: f64,
}

impl ComparisonPosition {
    const fn at(pct: f64) -> Self {
        Self {
            handle_left_pct: pct,
            before_width_pct: pct,
        }
    }
}

/// Image comparison controller. One per `.image-comparison` container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageComparison {
    dragging: bool,
    position_pct: f64,
}

impl ImageComparison {
    /// Create a comparison with the handle centered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dragging: false,
            position_pct: 50.0,
        }
    }

    /// Initial render position (handle centered).
    #[must_use]
    pub const fn initial_position(&self) -> ComparisonPosition {
        ComparisonPosition::at(self.position_pct)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer or touch pressed on the handle.
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Pointer or touch released anywhere.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved to `x` within a container of `width` pixels. Returns a
    /// new position only while dragging, clamped to 0-100%.
    pub fn drag_to(&mut self, x: f64, width: f64) -> Option<ComparisonPosition> {
        if !self.dragging || width <= 0.0 {
            return None;
        }
        self.position_pct = (x / width * 100.0).clamp(0.0, 100.0);
        Some(ComparisonPosition::at(self.position_pct))
    }
}

impl Default for ImageComparison {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_centered_and_idle() {
        let c = ImageComparison::new();
        assert!(!c.is_dragging());
        assert_eq!(c.initial_position(), ComparisonPosition::at(50.0));
    }

    #[test]
    fn test_moves_ignored_unless_dragging() {
        let mut c = ImageComparison::new();
        assert_eq!(c.drag_to(100.0, 400.0), None);
        c.press();
        assert_eq!(c.drag_to(100.0, 400.0), Some(ComparisonPosition::at(25.0)));
        c.release();
        assert_eq!(c.drag_to(300.0, 400.0), None);
    }

    #[test]
    fn test_clamps_to_container() {
        let mut c = ImageComparison::new();
        c.press();
        assert_eq!(c.drag_to(-50.0, 400.0), Some(ComparisonPosition::at(0.0)));
        assert_eq!(c.drag_to(900.0, 400.0), Some(ComparisonPosition::at(100.0)));
    }

    #[test]
    fn test_zero_width_container_ignored() {
        let mut c = ImageComparison::new();
        c.press();
        assert_eq!(c.drag_to(10.0, 0.0), None);
    }

    #[test]
    fn test_handle_and_before_width_move_together() {
        let mut c = ImageComparison::new();
        c.press();
        let pos = c.drag_to(120.0, 400.0).expect("dragging");
        assert_eq!(pos.handle_left_pct, pos.before_width_pct);
    }

    proptest! {
        #[test]
        fn prop_position_always_in_percent_range(
            x in -10_000.0f64..10_000.0,
            width in 1.0f64..5000.0,
        ) {
            let mut c = ImageComparison::new();
            c.press();
            let pos = c.drag_to(x, width).expect("dragging with positive width");
            prop_assert!((0.0..=100.0).contains(&pos.handle_left_pct));
        }
    }
}
