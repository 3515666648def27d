//! Easing functions for scripted animations.

/// Standard easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Quadratic ease in (slow start)
    EaseIn,
    /// Quadratic ease out (slow end)
    EaseOut,
    /// Quadratic ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Eased scroll position for the smooth-scroll animation.
///
/// Quadratic ease-in-out over absolute values: `start` position, total
/// `distance` to travel, `elapsed` and `duration` in milliseconds.
#[must_use]
pub fn ease_scroll(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + distance;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    distance.mul_add(Easing::EaseInOut.apply(t), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ease_scroll_bounds() {
        assert_eq!(ease_scroll(0.0, 100.0, 400.0, 500.0), 100.0);
        assert_eq!(ease_scroll(500.0, 100.0, 400.0, 500.0), 500.0);
        // Past the end of the animation the target holds.
        assert_eq!(ease_scroll(900.0, 100.0, 400.0, 500.0), 500.0);
    }

    #[test]
    fn test_ease_scroll_zero_duration() {
        assert_eq!(ease_scroll(0.0, 10.0, 90.0, 0.0), 100.0);
    }

    proptest! {
        #[test]
        fn prop_easing_in_unit_range(t in 0.0f64..=1.0) {
            for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
                let v = easing.apply(t);
                prop_assert!((-1e-9..=1.0 + 1e-9).contains(&v));
            }
        }

        #[test]
        fn prop_ease_scroll_monotonic(
            start in -1000.0f64..1000.0,
            distance in 0.0f64..2000.0,
            duration in 1.0f64..5000.0,
        ) {
            let a = ease_scroll(duration * 0.25, start, distance, duration);
            let b = ease_scroll(duration * 0.75, start, distance, duration);
            prop_assert!(b >= a - 1e-9);
        }
    }
}
