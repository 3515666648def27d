//! Timer and frame-callback plumbing.
//!
//! `Timeout` and `Interval` own their `Closure` and clear themselves on
//! drop; page-lifetime timers call [`Timeout::forget`] instead.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Current wall-clock time in milliseconds.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A pending `setTimeout` call.
pub struct Timeout {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`. Returns `None` outside a
    /// window context.
    pub fn new(delay_ms: f64, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms.max(0.0) as i32,
            )
            .ok()?;
        Some(Self {
            id,
            closure: Some(closure),
        })
    }

    /// Let the timeout outlive this handle (page-lifetime timers).
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if self.closure.is_some() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(self.id);
            }
        }
    }
}

/// A recurring `setInterval` call; cleared on drop.
pub struct Interval {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Interval {
    /// Schedule `callback` every `period_ms`.
    pub fn new(period_ms: f64, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.max(0.0) as i32,
            )
            .ok()?;
        Some(Self {
            id,
            closure: Some(closure),
        })
    }

    /// Let the interval run for the page's lifetime.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if self.closure.is_some() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.id);
            }
        }
    }
}

/// Run `step` once per animation frame until it returns `false`.
pub fn frame_loop(mut step: impl FnMut() -> bool + 'static) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle_clone = Rc::clone(&handle);

    let closure = Closure::wrap(Box::new(move || {
        if step() {
            if let Some(window) = web_sys::window() {
                if let Some(closure) = handle_clone.borrow().as_ref() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        } else {
            // Done: drop the closure so the loop can't be re-entered.
            handle_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
    *handle.borrow_mut() = Some(closure);
}
