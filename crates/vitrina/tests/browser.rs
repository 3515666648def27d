//! Browser-side smoke tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use vitrina::browser::{carousel, dom, effects, forms, nav, timers};
use vitrina_components::form::MessageKind;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn query_for_absent_markup_is_none() {
    let document = dom::document().expect("test runner provides a document");
    assert!(dom::query(&document, ".project-slider").is_none());
    assert!(dom::query_all(&document, ".modal").is_empty());
}

#[wasm_bindgen_test]
fn class_helpers_round_trip() {
    let document = dom::document().expect("document");
    let el = dom::create(&document, "div", "reveal", Some("hello")).expect("create element");
    assert!(dom::has_class(&el, "reveal"));
    dom::add_class(&el, "revealed");
    assert!(dom::has_class(&el, "revealed"));
    dom::remove_class(&el, "revealed");
    assert!(!dom::has_class(&el, "revealed"));
    assert_eq!(el.text_content().as_deref(), Some("hello"));
}

#[wasm_bindgen_test]
fn clock_is_monotonic_enough() {
    let a = timers::now_ms();
    let b = timers::now_ms();
    assert!(b >= a);
    assert!(a > 0.0);
}

#[wasm_bindgen_test]
fn project_tab_click_marks_it_active() {
    let document = dom::document().expect("document");
    let body = dom::body(&document).expect("body");
    let tab = dom::create(&document, "a", "project-nav__tab", Some("Buildings")).expect("tab");
    tab.set_attribute("href", "#buildings").expect("href");
    let section = dom::create(&document, "section", "projects-category", None).expect("section");
    section.set_id("buildings");
    body.append_child(&tab).expect("attach tab");
    body.append_child(&section).expect("attach section");

    nav::init_tabs();
    let click = web_sys::Event::new("click").expect("event");
    tab.dispatch_event(&click).expect("dispatch");
    assert!(dom::has_class(&tab, "active"));

    tab.remove();
    section.remove();
}

#[wasm_bindgen_test]
fn hero_slideshow_builds_its_own_images() {
    let document = dom::document().expect("document");
    let body = dom::body(&document).expect("body");
    let hero = dom::create(&document, "section", "hero hero--image", None).expect("hero");
    body.append_child(&hero).expect("attach hero");

    effects::init();
    let container = dom::query_in(&hero, ".hero__image-container").expect("container injected");
    assert!(dom::query_in(&container, ".hero__overlay").is_some());
    assert_eq!(dom::query_all_in(&container, "img").len(), 4);

    hero.remove();
}

#[wasm_bindgen_test]
fn slider_pagination_dots_are_spans() {
    let document = dom::document().expect("document");
    let body = dom::body(&document).expect("body");
    let root = dom::create(&document, "div", "project-slider", None).expect("root");
    let strip = dom::create(&document, "div", "project-slider__slides", None).expect("strip");
    for _ in 0..2 {
        let slide = dom::create(&document, "div", "project-slider__slide", None).expect("slide");
        strip.append_child(&slide).expect("attach slide");
    }
    let pagination =
        dom::create(&document, "div", "project-slider__pagination", None).expect("pagination");
    root.append_child(&strip).expect("attach strip");
    root.append_child(&pagination).expect("attach pagination");
    body.append_child(&root).expect("attach root");

    carousel::init();
    let dots = dom::query_all_in(&pagination, ".project-slider__dot");
    assert_eq!(dots.len(), 2);
    assert!(dots.iter().all(|dot| dot.tag_name() == "SPAN"));

    root.remove();
}

#[wasm_bindgen_test]
fn form_banner_replaces_previous_message() {
    let document = dom::document().expect("document");
    let body = dom::body(&document).expect("body");
    let form: HtmlFormElement = document
        .create_element("form")
        .expect("form")
        .dyn_into()
        .expect("form element");
    body.append_child(&form).expect("attach form");

    forms::show_message(&form, "Thanks!", MessageKind::Success);
    forms::show_message(&form, "Something went wrong", MessageKind::Error);

    let form_el: &Element = form.as_ref();
    let banners = dom::query_all_in(form_el, ".form__message");
    assert_eq!(banners.len(), 1);
    assert!(dom::has_class(&banners[0], "form__message--error"));
    assert_eq!(
        banners[0].text_content().as_deref(),
        Some("Something went wrong")
    );

    form.remove();
}
