//! Conversion from web events to core events.

use vitrina_core::{Event, Key, Point};
use web_sys::{KeyboardEvent, TouchEvent};

/// Convert a `web_sys` `KeyboardEvent` to a core [`Event`].
pub fn keyboard_event_to_core(event: &KeyboardEvent) -> Event {
    Event::KeyDown {
        key: Key::from_dom(&event.key()),
    }
}

/// Client-coordinate position of a touch event's first active touch.
pub fn touch_position(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

/// Screen-coordinate x of the first changed touch, used by swipe tracking.
pub fn changed_touch_screen_x(event: &TouchEvent) -> Option<f64> {
    let touch = event.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
