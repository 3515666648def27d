//! Slider wiring: one controller per `.project-slider` container.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, TouchEvent};

use vitrina_components::carousel::{Carousel, CarouselEffect, AUTOPLAY_INTERVAL_MS};

use super::{dom, events, timers};

#[derive(Clone)]
struct SliderHandle {
    root: Element,
    strip: Element,
    state: Rc<RefCell<Carousel>>,
    timer: Rc<RefCell<Option<timers::Interval>>>,
}

/// Wire every slider on the page.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    for root in dom::query_all(&document, ".project-slider") {
        wire(&document, root);
    }
}

fn wire(document: &web_sys::Document, root: Element) {
    let Some(strip) = dom::query_in(&root, ".project-slider__slides") else {
        return;
    };
    let slide_count = dom::query_all_in(&root, ".project-slider__slide").len();
    if slide_count == 0 {
        return;
    }

    let handle = SliderHandle {
        root: root.clone(),
        strip,
        state: Rc::new(RefCell::new(Carousel::new(slide_count))),
        timer: Rc::new(RefCell::new(None)),
    };

    build_dots(document, &handle, slide_count);

    if let Some(prev) = dom::query_in(&root, ".project-slider__prev") {
        let handle = handle.clone();
        listen(&prev, "click", move |_| {
            let effects = handle.state.borrow_mut().prev();
            apply(&handle, &effects);
        });
    }
    if let Some(next) = dom::query_in(&root, ".project-slider__next") {
        let handle = handle.clone();
        listen(&next, "click", move |_| {
            let effects = handle.state.borrow_mut().next();
            apply(&handle, &effects);
        });
    }

    {
        let handle = handle.clone();
        listen(&root, "mouseenter", move |_| {
            let effects = handle.state.borrow_mut().pointer_enter();
            apply(&handle, &effects);
        });
    }
    {
        let handle = handle.clone();
        listen(&root, "mouseleave", move |_| {
            let effects = handle.state.borrow_mut().pointer_leave();
            apply(&handle, &effects);
        });
    }

    {
        let handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(x) = events::changed_touch_screen_x(&event) {
                handle.state.borrow_mut().touch_start(x);
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        let _ =
            root.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(x) = events::changed_touch_screen_x(&event) {
                let effects = handle.state.borrow_mut().touch_end(x);
                apply(&handle, &effects);
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        let _ = root.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    start_timer(&handle);
}

/// One pagination dot per slide, built into the pagination container.
fn build_dots(document: &web_sys::Document, handle: &SliderHandle, slide_count: usize) {
    let Some(pagination) = dom::query_in(&handle.root, ".project-slider__pagination") else {
        return;
    };
    for index in 0..slide_count {
        let Some(dot) = dom::create(document, "span", "project-slider__dot", None) else {
            continue;
        };
        if index == 0 {
            dom::add_class(&dot, "active");
        }
        let handle = handle.clone();
        listen(&dot, "click", move |_| {
            let effects = handle.state.borrow_mut().go_to(index);
            apply(&handle, &effects);
        });
        let _ = pagination.append_child(&dot);
    }
}

fn listen(target: &Element, event: &str, callback: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply(handle: &SliderHandle, effects: &[CarouselEffect]) {
    for effect in effects {
        match effect {
            CarouselEffect::SetOffset(pct) => {
                dom::set_style(&handle.strip, "transform", &format!("translateX({pct}%)"));
            }
            CarouselEffect::SetActiveDot(index) => {
                let dots = dom::query_all_in(&handle.root, ".project-slider__dot");
                for (i, dot) in dots.iter().enumerate() {
                    if i == *index {
                        dom::add_class(dot, "active");
                    } else {
                        dom::remove_class(dot, "active");
                    }
                }
            }
            CarouselEffect::StartTimer => start_timer(handle),
            CarouselEffect::StopTimer => {
                handle.timer.borrow_mut().take();
            }
        }
    }
}

fn start_timer(handle: &SliderHandle) {
    let tick_handle = handle.clone();
    let interval = timers::Interval::new(AUTOPLAY_INTERVAL_MS, move || {
        let effects = tick_handle.state.borrow_mut().on_timer();
        apply(&tick_handle, &effects);
    });
    *handle.timer.borrow_mut() = interval;
}
