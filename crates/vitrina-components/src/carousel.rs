//! Slide carousel controller: manual stepping, pagination jumps, autoplay
//! with hover pause, and touch swipe.

use serde::{Deserialize, Serialize};

/// Autoplay advance interval.
pub const AUTOPLAY_INTERVAL_MS: f64 = 5000.0;

/// Minimum horizontal travel for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// DOM mutations requested by the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarouselEffect {
    /// Set the slide strip's horizontal offset, in percent (`-100` for the
    /// second slide, and so on).
    SetOffset(f64),
    /// Mark the pagination dot at this index active, all others inactive.
    SetActiveDot(usize),
    /// Start (or restart) the autoplay interval timer.
    StartTimer,
    /// Stop the autoplay interval timer.
    StopTimer,
}

/// Carousel state: current slide index plus autoplay and swipe bookkeeping.
///
/// Resuming after a hover pause starts a fresh full interval rather than
/// continuing the suspended one; leaving the slider always buys the viewer
/// another [`AUTOPLAY_INTERVAL_MS`] before the next advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    autoplay: bool,
    touch_start_x: Option<f64>,
}

impl Carousel {
    /// Create a carousel over `slide_count` slides, starting at slide 0
    /// with autoplay running.
    #[must_use]
    pub const fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            autoplay: true,
            touch_start_x: None,
        }
    }

    /// Current slide index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether the autoplay timer should be running.
    #[must_use]
    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Horizontal offset of the slide strip in percent.
    #[must_use]
    pub fn offset_percent(&self) -> f64 {
        -(self.current as f64 * 100.0)
    }

    fn render(&self) -> Vec<CarouselEffect> {
        vec![
            CarouselEffect::SetOffset(self.offset_percent()),
            CarouselEffect::SetActiveDot(self.current),
        ]
    }

    /// Step to the next slide, wrapping past the end.
    pub fn next(&mut self) -> Vec<CarouselEffect> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        self.current = (self.current + 1) % self.slide_count;
        self.render()
    }

    /// Step to the previous slide, wrapping past the start.
    pub fn prev(&mut self) -> Vec<CarouselEffect> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.render()
    }

    /// Jump to an absolute slide index. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Vec<CarouselEffect> {
        if index >= self.slide_count {
            return Vec::new();
        }
        self.current = index;
        self.render()
    }

    /// Autoplay timer fired: advance one slide.
    pub fn on_timer(&mut self) -> Vec<CarouselEffect> {
        self.next()
    }

    /// Pointer entered the slider: suspend autoplay.
    pub fn pointer_enter(&mut self) -> Vec<CarouselEffect> {
        self.autoplay = false;
        vec![CarouselEffect::StopTimer]
    }

    /// Pointer left the slider: resume autoplay with a fresh interval.
    pub fn pointer_leave(&mut self) -> Vec<CarouselEffect> {
        self.autoplay = true;
        vec![CarouselEffect::StartTimer]
    }

    /// Record the starting x coordinate of a touch.
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Touch lifted at `x`: a horizontal delta past the threshold steps one
    /// slide in the swipe direction; anything smaller is a tap and ignored.
    pub fn touch_end(&mut self, x: f64) -> Vec<CarouselEffect> {
        let Some(start_x) = self.touch_start_x.take() else {
            return Vec::new();
        };
        if start_x - x > SWIPE_THRESHOLD_PX {
            self.next()
        } else if x - start_x > SWIPE_THRESHOLD_PX {
            self.prev()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_wraps_modulo_slide_count() {
        let mut c = Carousel::new(4);
        for expected in [1, 2, 3, 0, 1] {
            c.next();
            assert_eq!(c.current(), expected);
        }
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.current(), 3);
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_n_next_then_prev() {
        let n = 7;
        let mut c = Carousel::new(4);
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.current(), n % 4);
        c.prev();
        assert_eq!(c.current(), (n % 4 + 3) % 4);
    }

    #[test]
    fn test_offset_percent() {
        let mut c = Carousel::new(4);
        assert_eq!(c.offset_percent(), 0.0);
        c.go_to(2);
        assert_eq!(c.offset_percent(), -200.0);
    }

    #[test]
    fn test_go_to_out_of_range_ignored() {
        let mut c = Carousel::new(3);
        c.go_to(1);
        assert!(c.go_to(3).is_empty());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_render_effects() {
        let mut c = Carousel::new(4);
        let effects = c.next();
        assert_eq!(
            effects,
            vec![
                CarouselEffect::SetOffset(-100.0),
                CarouselEffect::SetActiveDot(1),
            ]
        );
    }

    #[test]
    fn test_hover_pauses_and_resume_restarts_interval() {
        let mut c = Carousel::new(4);
        assert_eq!(c.pointer_enter(), vec![CarouselEffect::StopTimer]);
        assert!(!c.autoplay());
        // Resuming asks for a brand-new timer, not a continuation.
        assert_eq!(c.pointer_leave(), vec![CarouselEffect::StartTimer]);
        assert!(c.autoplay());
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut c = Carousel::new(4);
        c.touch_start(300.0);
        c.touch_end(200.0);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut c = Carousel::new(4);
        c.touch_start(100.0);
        c.touch_end(220.0);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_small_delta_is_a_tap() {
        let mut c = Carousel::new(4);
        c.touch_start(100.0);
        assert!(c.touch_end(140.0).is_empty());
        assert_eq!(c.current(), 0);
        // Exactly at the threshold is still a tap.
        c.touch_start(100.0);
        assert!(c.touch_end(50.0).is_empty());
    }

    #[test]
    fn test_touch_end_without_start_ignored() {
        let mut c = Carousel::new(4);
        assert!(c.touch_end(500.0).is_empty());
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        assert!(c.next().is_empty());
        assert!(c.prev().is_empty());
        assert_eq!(c.current(), 0);
    }

    proptest! {
        #[test]
        fn prop_current_always_in_range(steps in proptest::collection::vec(0u8..3, 0..64)) {
            let mut c = Carousel::new(5);
            for step in steps {
                match step {
                    0 => { c.next(); }
                    1 => { c.prev(); }
                    _ => { c.on_timer(); }
                }
                prop_assert!(c.current() < 5);
            }
        }

        #[test]
        fn prop_next_prev_cancel(n in 0usize..32) {
            let mut c = Carousel::new(4);
            for _ in 0..n {
                c.next();
            }
            for _ in 0..n {
                c.prev();
            }
            prop_assert_eq!(c.current(), 0);
        }
    }
}
