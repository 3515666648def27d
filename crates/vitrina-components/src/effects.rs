//! Scroll-driven visual effects: header shrink, reveal-on-scroll, counter
//! animation, parallax, and the hero background slideshow.

use serde::{Deserialize, Serialize};

/// Autoplay interval of the hero background slideshow.
pub const SLIDESHOW_INTERVAL_MS: f64 = 5000.0;

/// Visibility fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Visibility fraction that starts a counter.
pub const COUNTER_THRESHOLD: f64 = 0.8;

/// Default counter animation duration.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Frame budget the counter increment is derived from.
const FRAME_MS: f64 = 16.0;

/// Header scroll effect: past the threshold the header gains its
/// "scrolled" class and the scroll-top button becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderScroll {
    threshold: f64,
    scrolled: bool,
}

impl HeaderScroll {
    /// Create with a pixel threshold (50 or 100 depending on the page).
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Whether the header is currently in its scrolled state.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed a scroll position. Returns the new state only when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

/// One-shot reveal: the first time enough of the element is visible it is
/// revealed permanently and the watch is released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    /// Create an unrevealed watcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: false }
    }

    /// Whether the element has been revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the visible fraction. Returns `true` exactly once, at the
    /// moment the element should gain its "revealed" class; the caller then
    /// releases the watch.
    pub fn on_visibility(&mut self, fraction: f64) -> bool {
        if self.revealed || fraction < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter animation: numeric text climbs from 0 to a target over a
/// duration, advancing by a constant increment per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    target: u64,
    increment: f64,
    current: f64,
    running: bool,
    done: bool,
}

impl Counter {
    /// Create a counter for a target value and duration; the increment is
    /// `target / (duration / 16)`, one frame's worth of progress.
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        let duration = if duration_ms > 0.0 {
            duration_ms
        } else {
            COUNTER_DURATION_MS
        };
        Self {
            target,
            increment: target as f64 / (duration / FRAME_MS),
            current: 0.0,
            running: false,
            done: false,
        }
    }

    /// Whether the animation has started.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the animation has finished.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Feed the visible fraction; starts the animation once 80% visible.
    /// Returns `true` when the caller should begin the frame loop.
    pub fn on_visibility(&mut self, fraction: f64) -> bool {
        if self.running || self.done || fraction < COUNTER_THRESHOLD {
            return false;
        }
        self.running = true;
        true
    }

    /// Advance one frame. Returns the text to render, or `None` once
    /// finished (after the final exact target has been emitted).
    pub fn on_frame(&mut self) -> Option<String> {
        if !self.running {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(format!("{}", self.current.ceil() as u64))
        } else {
            self.running = false;
            self.done = true;
            Some(self.target.to_string())
        }
    }
}

/// Parallax background: repositions the background vertically at a fraction
/// of the scroll distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallax {
    speed: f64,
}

impl Parallax {
    /// Default scroll-speed fraction when the markup declares none.
    pub const DEFAULT_SPEED: f64 = 0.5;

    /// Create with a speed, usually from a `data-speed` hint.
    #[must_use]
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Parse the `data-speed` attribute value, falling back to the default.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        let speed = attr
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_SPEED);
        Self::new(speed)
    }

    /// Vertical background offset for a scroll position.
    #[must_use]
    pub fn background_y(&self, scroll_y: f64) -> f64 {
        -(scroll_y * self.speed)
    }
}

/// Opacity change for one slideshow image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideshowFade {
    /// Image index to mutate.
    pub index: usize,
    /// New opacity, 0.0 or 1.0.
    pub opacity: f64,
}

/// Hero background slideshow: cross-fades to the next image in a fixed
/// list on every timer tick, looping indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroSlideshow {
    image_count: usize,
    current: usize,
}

impl HeroSlideshow {
    /// Create a slideshow over `image_count` images, starting at the first.
    #[must_use]
    pub const fn new(image_count: usize) -> Self {
        Self {
            image_count,
            current: 0,
        }
    }

    /// Index of the currently visible image.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Timer tick: fade out the current image and fade in the next.
    pub fn on_timer(&mut self) -> Vec<SlideshowFade> {
        if self.image_count < 2 {
            return Vec::new();
        }
        let fading_out = self.current;
        self.current = (self.current + 1) % self.image_count;
        vec![
            SlideshowFade {
                index: fading_out,
                opacity: 0.0,
            },
            SlideshowFade {
                index: self.current,
                opacity: 1.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_scroll_crossing_emits_once() {
        let mut h = HeaderScroll::new(50.0);
        assert_eq!(h.on_scroll(10.0), None);
        assert_eq!(h.on_scroll(51.0), Some(true));
        // No repeat while still past the threshold.
        assert_eq!(h.on_scroll(400.0), None);
        assert_eq!(h.on_scroll(50.0), Some(false));
        assert_eq!(h.on_scroll(0.0), None);
    }

    #[test]
    fn test_reveal_one_shot() {
        let mut r = Reveal::new();
        assert!(!r.on_visibility(0.1));
        assert!(r.on_visibility(0.2));
        assert!(r.is_revealed());
        // Released: further visibility changes do nothing.
        assert!(!r.on_visibility(1.0));
        assert!(!r.on_visibility(0.0));
    }

    #[test]
    fn test_counter_starts_at_80_percent() {
        let mut c = Counter::new(100, 2000.0);
        assert!(!c.on_visibility(0.5));
        assert!(c.on_visibility(0.8));
        assert!(c.is_running());
        // Already running: no second start.
        assert!(!c.on_visibility(1.0));
    }

    #[test]
    fn test_counter_increment_formula() {
        let c = Counter::new(500, 2000.0);
        // 500 / (2000 / 16) = 4 per frame.
        assert!((c.increment - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_counter_climbs_and_lands_exactly() {
        let mut c = Counter::new(10, 160.0);
        c.on_visibility(1.0);
        // Increment = 1 per frame; ceil shows 1, 2, ... then exact target.
        assert_eq!(c.on_frame().as_deref(), Some("1"));
        let mut last = String::new();
        while let Some(text) = c.on_frame() {
            last = text;
        }
        assert_eq!(last, "10");
        assert!(c.is_done());
        assert_eq!(c.on_frame(), None);
    }

    #[test]
    fn test_counter_zero_duration_uses_default() {
        let c = Counter::new(100, 0.0);
        assert!((c.increment - 100.0 / (COUNTER_DURATION_MS / 16.0)).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_offset() {
        let p = Parallax::new(0.5);
        assert_eq!(p.background_y(200.0), -100.0);
        assert_eq!(p.background_y(0.0), 0.0);
    }

    #[test]
    fn test_parallax_from_attr() {
        assert_eq!(Parallax::from_attr(Some("0.3")).speed, 0.3);
        assert_eq!(Parallax::from_attr(Some("fast")).speed, Parallax::DEFAULT_SPEED);
        assert_eq!(Parallax::from_attr(None).speed, Parallax::DEFAULT_SPEED);
    }

    #[test]
    fn test_slideshow_cycles_and_loops() {
        let mut s = HeroSlideshow::new(4);
        let fades = s.on_timer();
        assert_eq!(
            fades,
            vec![
                SlideshowFade { index: 0, opacity: 0.0 },
                SlideshowFade { index: 1, opacity: 1.0 },
            ]
        );
        s.on_timer();
        s.on_timer();
        let wrap = s.on_timer();
        assert_eq!(wrap[1].index, 0);
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_slideshow_single_image_is_inert() {
        let mut s = HeroSlideshow::new(1);
        assert!(s.on_timer().is_empty());
        assert_eq!(s.current(), 0);
    }
}
