//! `document.cookie` and `location.search` access.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::{dom, timers};

fn html_document() -> Option<HtmlDocument> {
    dom::document()?.dyn_into::<HtmlDocument>().ok()
}

/// Read a cookie by name.
pub fn get(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    vitrina_core::cookie::get_cookie(&header, name)
}

/// Set a cookie, optionally expiring `days` from now.
pub fn set(name: &str, value: &str, days: Option<f64>) {
    if let Some(doc) = html_document() {
        let assignment =
            vitrina_core::cookie::set_cookie_string(name, value, days, timers::now_ms());
        let _ = doc.set_cookie(&assignment);
    }
}

/// Delete a cookie by name.
pub fn delete(name: &str) {
    if let Some(doc) = html_document() {
        let assignment = vitrina_core::cookie::delete_cookie_string(name, timers::now_ms());
        let _ = doc.set_cookie(&assignment);
    }
}

/// Read a query parameter from the current page URL.
pub fn page_param(name: &str) -> Option<String> {
    let search = dom::window()?.location().search().ok()?;
    vitrina_core::query::query_param(&search, name)
}
