//! DOM lookup and mutation helpers.
//!
//! Everything returns `Option`: a missing element means the page simply
//! doesn't use that component, so callers bail out quietly.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// The window, if running in one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The document.
pub fn document() -> Option<Document> {
    window()?.document()
}

/// The document body as an element.
pub fn body(document: &Document) -> Option<Element> {
    document.body().map(Into::into)
}

/// First element matching a selector.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First descendant of `root` matching a selector.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements matching a selector.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

/// All descendants of `root` matching a selector.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web_sys::NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i)?.dyn_into::<Element>().ok())
        .collect()
}

/// Add a class to an element.
pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

/// Remove a class from an element.
pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Toggle a class on an element.
pub fn toggle_class(element: &Element, class: &str) {
    let _ = element.class_list().toggle(class);
}

/// Whether an element carries a class.
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// View an element as an `HtmlElement` for style access.
pub fn html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}

/// Set an inline style property, ignoring failures.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = html(element) {
        let _ = el.style().set_property(property, value);
    }
}

/// Create an element with a class, already carrying text if given.
pub fn create(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Option<Element> {
    let element = document.create_element(tag).ok()?;
    element.set_class_name(class);
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    Some(element)
}

/// Current vertical scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Current viewport width.
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}
