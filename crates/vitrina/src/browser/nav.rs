//! Mobile navigation and the projects-page tab highlighter.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use vitrina_components::nav::{MobileNav, Section, TabHighlighter};

use super::dom;

/// Wire the mobile menu toggle, outside-click close, resize close, and
/// mobile dropdown interception. No-op when the header markup is absent.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let (Some(toggle), Some(nav)) = (
        dom::query(&document, ".header__mobile-toggle"),
        dom::query(&document, ".header__nav"),
    ) else {
        return;
    };

    let state = Rc::new(RefCell::new(MobileNav::new()));

    {
        let state = Rc::clone(&state);
        let toggle_el = toggle.clone();
        let nav_el = nav.clone();
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let open = state.borrow_mut().toggle();
            apply_open(&toggle_el, &nav_el, open);
        }) as Box<dyn FnMut(Event)>);
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let state = Rc::clone(&state);
        let toggle_el = toggle.clone();
        let nav_el = nav.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let inside_nav = nav_el.contains(Some(target.as_ref()));
            let inside_toggle = toggle_el.contains(Some(target.as_ref()));
            if state.borrow_mut().outside_click(inside_nav, inside_toggle) {
                apply_open(&toggle_el, &nav_el, false);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(window) = dom::window() {
        let state = Rc::clone(&state);
        let toggle_el = toggle.clone();
        let nav_el = nav.clone();
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let Some(window) = dom::window() else {
                return;
            };
            if state.borrow_mut().resize(dom::viewport_width(&window)) {
                apply_open(&toggle_el, &nav_el, false);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for link in dom::query_all(&document, ".nav__item.dropdown > .nav__link") {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(window) = dom::window() else {
                return;
            };
            if !MobileNav::dropdown_intercepts(dom::viewport_width(&window)) {
                return;
            }
            event.prevent_default();
            if let Some(item) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".nav__item.dropdown").ok().flatten())
            {
                dom::toggle_class(&item, "active");
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_open(toggle: &Element, nav: &Element, open: bool) {
    if open {
        dom::add_class(toggle, "active");
        dom::add_class(nav, "active");
    } else {
        dom::remove_class(toggle, "active");
        dom::remove_class(nav, "active");
    }
    if let Some(body) = dom::document().and_then(|d| dom::body(&d)) {
        if open {
            dom::add_class(&body, "nav-open");
        } else {
            dom::remove_class(&body, "nav-open");
        }
    }
}

/// Wire the projects-page category tabs: a click marks the tab active and
/// scrolls to its category section, scrolling highlights the tab of the
/// section in view.
pub fn init_tabs() {
    let Some(document) = dom::document() else {
        return;
    };
    let tabs = dom::query_all(&document, ".project-nav__tab");
    if tabs.is_empty() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };

    let mut sections = Vec::new();
    for section in dom::query_all(&document, ".projects-category") {
        let Some(id) = section.get_attribute("id") else {
            continue;
        };
        let top = section.get_bounding_client_rect().top() + dom::scroll_y(&window);
        sections.push(Section { id, top });
    }
    sections.sort_by(|a, b| a.top.total_cmp(&b.top));

    for tab in &tabs {
        let tab_el = tab.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let Some(document) = dom::document() else {
                return;
            };
            for other in dom::query_all(&document, ".project-nav__tab") {
                dom::remove_class(&other, "active");
            }
            dom::add_class(&tab_el, "active");

            let Some(id) = tab_el
                .get_attribute("href")
                .and_then(|h| h.strip_prefix('#').map(String::from))
            else {
                return;
            };
            if let Some(target) = document.get_element_by_id(&id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = tab.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let highlighter = Rc::new(RefCell::new(TabHighlighter::new(sections)));
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let Some(window) = dom::window() else {
            return;
        };
        let Some(change) = highlighter.borrow_mut().on_scroll(dom::scroll_y(&window)) else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };
        for tab in dom::query_all(&document, ".project-nav__tab") {
            let href = tab.get_attribute("href").unwrap_or_default();
            let matches = change
                .as_deref()
                .is_some_and(|id| href.strip_prefix('#') == Some(id));
            if matches {
                dom::add_class(&tab, "active");
            } else {
                dom::remove_class(&tab, "active");
            }
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
