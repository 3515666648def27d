//! Geometric primitives and viewport math: `Point`, `Size`, `Rect`, [`Viewport`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the size.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Rectangle area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the rectangle contains a point.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Intersection with another rectangle, or `None` if disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Self::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Fraction of this rectangle's area visible inside `viewport` (0.0 to 1.0).
    ///
    /// Degenerate rectangles (zero area) report 0.0.
    #[must_use]
    pub fn visible_fraction(&self, viewport: &Self) -> f64 {
        if self.area() <= 0.0 {
            return 0.0;
        }
        self.intersection(viewport)
            .map_or(0.0, |i| i.area() / self.area())
    }
}

/// The browser viewport: its size and the current vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport size in CSS pixels.
    pub size: Size,
    /// Vertical scroll offset from the top of the document.
    pub scroll_y: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll_y,
        }
    }

    /// The viewport as a rectangle in viewport-relative coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }
}

/// Whether an element rectangle (viewport-relative coordinates) lies fully
/// inside the viewport, expanded on every side by `offset` pixels.
#[must_use]
pub fn is_in_viewport(rect: &Rect, viewport: &Viewport, offset: f64) -> bool {
    rect.y >= -offset
        && rect.x >= -offset
        && rect.bottom() <= viewport.size.height + offset
        && rect.right() <= viewport.size.width + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(110.0, 60.0)));
        assert!(!r.contains(Point::new(9.0, 10.0)));
        assert!(!r.contains(Point::new(10.0, 61.0)));
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let i = a.intersection(&b).expect("rects overlap");
        assert_eq!(i, Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_visible_fraction_half() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Element half scrolled out of the bottom.
        let el = Rect::new(0.0, 50.0, 100.0, 100.0);
        assert!((el.visible_fraction(&viewport) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_visible_fraction_degenerate() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let el = Rect::new(10.0, 10.0, 0.0, 50.0);
        assert_eq!(el.visible_fraction(&viewport), 0.0);
    }

    #[test]
    fn test_is_in_viewport_edges() {
        let vp = Viewport::new(800.0, 600.0, 0.0);
        let inside = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(is_in_viewport(&inside, &vp, 0.0));

        let above = Rect::new(0.0, -1.0, 100.0, 100.0);
        assert!(!is_in_viewport(&above, &vp, 0.0));
        // A positive offset admits elements just outside the edge.
        assert!(is_in_viewport(&above, &vp, 1.0));
    }

    proptest! {
        #[test]
        fn prop_visible_fraction_bounded(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in 0.0f64..500.0,
            h in 0.0f64..500.0,
        ) {
            let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
            let el = Rect::new(x, y, w, h);
            let f = el.visible_fraction(&viewport);
            prop_assert!((0.0..=1.0 + 1e-9).contains(&f));
        }

        #[test]
        fn prop_intersection_commutes(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            aw in 1.0f64..100.0, ah in 1.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            bw in 1.0f64..100.0, bh in 1.0f64..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }
    }
}
