//! Input events fed to component controllers.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// The browser crate translates raw web events into these; controllers never
/// see DOM types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer pressed
    PointerDown {
        /// Position of the press
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer released
    PointerUp {
        /// Position of release
        position: Point,
    },
    /// Pointer entered the component's bounds
    PointerEnter,
    /// Pointer left the component's bounds
    PointerLeave,
    /// Touch started
    TouchStart {
        /// Touch position (screen coordinates)
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Final position
        position: Point,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Document scrolled
    Scroll {
        /// Vertical scroll offset
        y: f64,
    },
    /// Window resized
    Resize {
        /// New viewport width
        width: f64,
        /// New viewport height
        height: f64,
    },
    /// Clock tick (timer or animation frame)
    Tick {
        /// Current time in milliseconds
        now_ms: f64,
    },
}

/// Keys the behavior layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Any other key
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` string to a [`Key`].
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }
}
