//! Scroll and viewport-driven effects: header shrink, scroll-top button,
//! reveal and counter observers, parallax, hero slideshow, typing, smooth
//! anchor scrolling, and the image comparison slider.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, TouchEvent,
};

use vitrina_components::comparison::ImageComparison;
use vitrina_components::effects::{
    Counter, HeaderScroll, HeroSlideshow, Parallax, Reveal, COUNTER_DURATION_MS, COUNTER_THRESHOLD,
    REVEAL_THRESHOLD, SLIDESHOW_INTERVAL_MS,
};
use vitrina_components::typing::{Typing, DEFAULT_TYPE_SPEED_MS};
use vitrina_core::ease_scroll;

use super::{dom, events, timers};

/// Duration of the scripted smooth scroll.
const SCROLL_DURATION_MS: f64 = 800.0;

/// Wire every scroll/viewport effect present on the page.
pub fn init() {
    init_scroll_listener();
    init_reveal();
    init_counters();
    init_slideshow();
    init_typing();
    init_smooth_anchors();
    init_scroll_indicator();
    init_comparisons();
}

/// One window scroll listener fans out to the header state, the scroll-top
/// button, and every parallax background.
fn init_scroll_listener() {
    let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
        return;
    };

    // Pages with a full-height hero image shrink the header later.
    let threshold = if dom::query(&document, ".hero--image").is_some() {
        100.0
    } else {
        50.0
    };
    let header = Rc::new(RefCell::new(HeaderScroll::new(threshold)));

    let parallax: Vec<(Element, Parallax)> = dom::query_all(&document, ".parallax")
        .into_iter()
        .map(|el| {
            let speed = Parallax::from_attr(el.get_attribute("data-speed").as_deref());
            (el, speed)
        })
        .collect();

    if let Some(button) = dom::query(&document, ".scroll-top") {
        let closure = Closure::wrap(Box::new(move |_: Event| {
            if let Some(window) = dom::window() {
                animate_scroll(&window, 0.0);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let closure = Closure::wrap(Box::new(move |_: Event| {
        let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
            return;
        };
        let scroll_y = dom::scroll_y(&window);

        if let Some(scrolled) = header.borrow_mut().on_scroll(scroll_y) {
            if let Some(header_el) = dom::query(&document, ".header") {
                if scrolled {
                    dom::add_class(&header_el, "scrolled");
                } else {
                    dom::remove_class(&header_el, "scrolled");
                }
            }
            if let Some(button) = dom::query(&document, ".scroll-top") {
                if scrolled {
                    dom::add_class(&button, "visible");
                } else {
                    dom::remove_class(&button, "visible");
                }
            }
        }

        for (el, p) in &parallax {
            let y = p.background_y(scroll_y);
            dom::set_style(el, "background-position", &format!("50% {y}px"));
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn make_observer(
    threshold: f64,
    callback: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let mut callback = callback;
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    callback(entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options).ok()?;
    closure.forget();
    Some(observer)
}

/// Reveal-on-scroll: one-shot class add, then the element is unobserved.
fn init_reveal() {
    let Some(document) = dom::document() else {
        return;
    };
    let targets = dom::query_all(&document, ".reveal");
    if targets.is_empty() {
        return;
    }

    let watchers: Rc<RefCell<Vec<(Element, Reveal)>>> = Rc::new(RefCell::new(
        targets.iter().cloned().map(|el| (el, Reveal::new())).collect(),
    ));

    let watch = Rc::clone(&watchers);
    let Some(observer) = make_observer(REVEAL_THRESHOLD, move |entry, observer| {
        let target = entry.target();
        let fraction = entry.intersection_ratio();
        let mut watch = watch.borrow_mut();
        let Some((el, reveal)) = watch.iter_mut().find(|(el, _)| *el == target) else {
            return;
        };
        if reveal.on_visibility(fraction) {
            dom::add_class(el, "revealed");
            observer.unobserve(&target);
        }
    }) else {
        return;
    };

    for target in &targets {
        observer.observe(target);
    }
}

/// Counter-up animation, started once the element is mostly visible.
fn init_counters() {
    let Some(document) = dom::document() else {
        return;
    };
    let targets = dom::query_all(&document, ".counter");
    if targets.is_empty() {
        return;
    }

    let counters: Rc<RefCell<Vec<(Element, Counter)>>> = Rc::new(RefCell::new(
        targets
            .iter()
            .cloned()
            .map(|el| {
                let target: u64 = el
                    .get_attribute("data-target")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                let duration: f64 = el
                    .get_attribute("data-duration")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(COUNTER_DURATION_MS);
                (el, Counter::new(target, duration))
            })
            .collect(),
    ));

    let watch = Rc::clone(&counters);
    let Some(observer) = make_observer(COUNTER_THRESHOLD, move |entry, observer| {
        let target = entry.target();
        let fraction = entry.intersection_ratio();
        let started = {
            let mut watch = watch.borrow_mut();
            let Some((_, counter)) = watch.iter_mut().find(|(el, _)| *el == target) else {
                return;
            };
            counter.on_visibility(fraction)
        };
        if !started {
            return;
        }
        observer.unobserve(&target);

        let counters = Rc::clone(&watch);
        let target = target.clone();
        timers::frame_loop(move || {
            let mut counters = counters.borrow_mut();
            let Some((el, counter)) = counters.iter_mut().find(|(el, _)| *el == target) else {
                return false;
            };
            match counter.on_frame() {
                Some(text) => {
                    el.set_text_content(Some(&text));
                    true
                }
                None => false,
            }
        });
    }) else {
        return;
    };

    for target in &targets {
        observer.observe(target);
    }
}

/// Background images cycled behind a `.hero--image` hero.
const HERO_IMAGES: [&str; 4] = [
    "../assets/images/hero/back1.png",
    "../assets/images/hero/back2.png",
    "../assets/images/hero/back3.png",
    "../assets/images/hero/background.png",
];

/// Hero background cross-fade. Builds its own image container and overlay
/// inside `.hero--image` when the markup doesn't already carry them.
fn init_slideshow() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(hero) = dom::query(&document, ".hero--image") else {
        return;
    };

    let container = match dom::query_in(&hero, ".hero__image-container") {
        Some(existing) => existing,
        None => {
            let Some(created) = dom::create(&document, "div", "hero__image-container", None) else {
                return;
            };
            if hero.prepend_with_node_1(&created).is_err() {
                return;
            }
            created
        }
    };
    if dom::query_in(&container, ".hero__overlay").is_none() {
        if let Some(overlay) = dom::create(&document, "div", "hero__overlay", None) {
            let _ = container.append_child(&overlay);
        }
    }

    let mut images = dom::query_all_in(&container, "img");
    if images.is_empty() {
        for (index, src) in HERO_IMAGES.iter().enumerate() {
            let Some(element) = dom::create(&document, "img", "hero__image", None) else {
                continue;
            };
            if let Some(img) = element.dyn_ref::<web_sys::HtmlImageElement>() {
                img.set_src(src);
                img.set_alt(&format!("Maxwell Consultancy Background {}", index + 1));
            }
            dom::set_style(&element, "position", "absolute");
            dom::set_style(&element, "top", "0");
            dom::set_style(&element, "left", "0");
            dom::set_style(&element, "width", "100%");
            dom::set_style(&element, "height", "100%");
            dom::set_style(&element, "object-fit", "cover");
            dom::set_style(&element, "transition", "opacity 1.5s ease-in-out");
            dom::set_style(&element, "z-index", &(HERO_IMAGES.len() - index).to_string());
            let _ = container.append_child(&element);
            images.push(element);
        }
    }
    if images.len() < 2 {
        return;
    }

    for (index, image) in images.iter().enumerate() {
        let opacity = if index == 0 { "1" } else { "0" };
        dom::set_style(image, "opacity", opacity);
    }

    let state = Rc::new(RefCell::new(HeroSlideshow::new(images.len())));
    let interval = timers::Interval::new(SLIDESHOW_INTERVAL_MS, move || {
        for fade in state.borrow_mut().on_timer() {
            if let Some(image) = images.get(fade.index) {
                dom::set_style(image, "opacity", &fade.opacity.to_string());
            }
        }
    });
    // The slideshow runs for the page's lifetime.
    if let Some(interval) = interval {
        interval.forget();
    }
}

/// Typewriter headings: the element's own text is replayed one character at
/// a time through chained timeouts.
fn init_typing() {
    let Some(document) = dom::document() else {
        return;
    };
    for el in dom::query_all(&document, ".typing-text") {
        let full_text = el.text_content().unwrap_or_default();
        let speed = el
            .get_attribute("data-speed")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TYPE_SPEED_MS);
        el.set_text_content(Some(""));
        dom::add_class(&el, "typing");
        let state = Rc::new(RefCell::new(Typing::new(&full_text, speed)));
        type_step(el, state, speed);
    }
}

fn type_step(el: Element, state: Rc<RefCell<Typing>>, speed: f64) {
    let next_el = el.clone();
    let next_state = Rc::clone(&state);
    if let Some(timeout) = timers::Timeout::new(speed, move || {
        let step = next_state.borrow_mut().on_tick();
        let Some(step) = step else {
            return;
        };
        next_el.set_text_content(Some(&step.text));
        if step.finished {
            dom::remove_class(&next_el, "typing");
        } else {
            type_step(next_el.clone(), Rc::clone(&next_state), speed);
        }
    }) {
        timeout.forget();
    }
}

/// Scripted smooth scroll to a vertical position.
fn animate_scroll(window: &web_sys::Window, target_y: f64) {
    let start = dom::scroll_y(window);
    let distance = target_y - start;
    let started_at = timers::now_ms();
    timers::frame_loop(move || {
        let Some(window) = dom::window() else {
            return false;
        };
        let elapsed = timers::now_ms() - started_at;
        let position = ease_scroll(elapsed, start, distance, SCROLL_DURATION_MS);
        window.scroll_to_with_x_and_y(0.0, position);
        elapsed < SCROLL_DURATION_MS
    });
}

/// Plain fragment anchors scroll smoothly to their target, offset by the
/// fixed header's height. Modal triggers keep their own click handling.
fn init_smooth_anchors() {
    let Some(document) = dom::document() else {
        return;
    };
    for anchor in dom::query_all(&document, "a[href^=\"#\"]:not([data-toggle])") {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
                return;
            };
            let Some(anchor) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(id) = anchor
                .get_attribute("href")
                .and_then(|h| h.strip_prefix('#').map(String::from))
            else {
                return;
            };
            if id.is_empty() {
                return;
            }
            let Some(target) = document.get_element_by_id(&id) else {
                return;
            };
            event.prevent_default();

            let header_height = dom::query(&document, ".header")
                .map_or(0.0, |h| h.get_bounding_client_rect().height());
            let target_y =
                target.get_bounding_client_rect().top() + dom::scroll_y(&window) - header_height;
            animate_scroll(&window, target_y.max(0.0));
        }) as Box<dyn FnMut(Event)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// The hero's bouncing chevron scrolls to the first content section.
fn init_scroll_indicator() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(indicator) = dom::query(&document, ".hero__scroll-indicator") else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let Some(document) = dom::document() else {
            return;
        };
        let target = dom::query(&document, ".booking-form")
            .or_else(|| dom::query(&document, ".about-preview"));
        if let Some(target) = target {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = indicator.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Before/after image comparison sliders.
fn init_comparisons() {
    let Some(document) = dom::document() else {
        return;
    };
    for container in dom::query_all(&document, ".image-comparison") {
        wire_comparison(&document, container);
    }
}

fn wire_comparison(document: &web_sys::Document, container: Element) {
    let Some(slider) = dom::query_in(&container, ".comparison-slider") else {
        return;
    };
    let state = Rc::new(RefCell::new(ImageComparison::new()));

    apply_comparison(&container, state.borrow().initial_position());

    {
        let state = Rc::clone(&state);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            state.borrow_mut().press();
        }) as Box<dyn FnMut(Event)>);
        let _ =
            slider.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        let _ =
            slider.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let state = Rc::clone(&state);
        let closure = Closure::wrap(Box::new(move |_: Event| {
            state.borrow_mut().release();
        }) as Box<dyn FnMut(Event)>);
        let _ =
            document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        let _ =
            document.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let state = Rc::clone(&state);
        let container_el = container.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = container_el.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            if let Some(position) = state.borrow_mut().drag_to(x, rect.width()) {
                apply_comparison(&container_el, position);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let state = Rc::clone(&state);
        let container_el = container.clone();
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            let Some(point) = events::touch_position(&event) else {
                return;
            };
            let rect = container_el.get_bounding_client_rect();
            let x = point.x - rect.left();
            if let Some(position) = state.borrow_mut().drag_to(x, rect.width()) {
                apply_comparison(&container_el, position);
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        let _ = document
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_comparison(
    container: &Element,
    position: vitrina_components::comparison::ComparisonPosition,
) {
    if let Some(slider) = dom::query_in(container, ".comparison-slider") {
        dom::set_style(&slider, "left", &format!("{}%", position.handle_left_pct));
    }
    if let Some(before) = dom::query_in(container, ".comparison-before") {
        dom::set_style(&before, "width", &format!("{}%", position.before_width_pct));
    }
}
