//! Project showcase wiring: card links populate and open the project modal.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlImageElement};

use vitrina_components::catalog::{Showcase, ShowcaseEffect, TextSlot};

use super::dom;
use super::modals::ModalHandle;

const fn slot_selector(slot: TextSlot) -> &'static str {
    match slot {
        TextSlot::Title => ".project-modal__title",
        TextSlot::Location => ".project-location",
        TextSlot::Client => ".project-client",
        TextSlot::Year => ".project-year",
        TextSlot::Services => ".project-services",
        TextSlot::Description => ".project-modal__description",
        TextSlot::Challenge => ".project-challenge",
        TextSlot::Solution => ".project-solution",
        TextSlot::Results => ".project-results",
    }
}

#[derive(Clone)]
struct ShowcaseHandle {
    panel: Element,
    modal: ModalHandle,
    state: Rc<RefCell<Showcase>>,
}

/// Wire the project cards to the project modal. `modals` must already be
/// bound; the showcase reuses the handle for `#project-modal`.
pub fn init(modals: &[ModalHandle]) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(modal) = modals.iter().find(|m| m.id() == "project-modal").cloned() else {
        return;
    };
    let Some(panel) = dom::query(&document, "#project-modal") else {
        return;
    };

    let handle = ShowcaseHandle {
        panel,
        modal,
        state: Rc::new(RefCell::new(Showcase::builtin())),
    };

    for link in dom::query_all(&document, ".project-card__link") {
        let Some(project_id) = link.get_attribute("data-project") else {
            continue;
        };
        let handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let effects = handle.state.borrow_mut().activate(&project_id);
            apply(&handle, &effects);
        }) as Box<dyn FnMut(Event)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply(handle: &ShowcaseHandle, effects: &[ShowcaseEffect]) {
    for effect in effects {
        match effect {
            ShowcaseEffect::SetText { slot, text } => {
                if let Some(target) = dom::query_in(&handle.panel, slot_selector(*slot)) {
                    target.set_text_content(Some(text));
                }
            }
            ShowcaseEffect::SetMainImage { url, alt } => set_main_image(handle, url, alt),
            ShowcaseEffect::ClearThumbnails => {
                if let Some(strip) = dom::query_in(&handle.panel, ".project-modal__thumbnails") {
                    strip.set_inner_html("");
                }
            }
            ShowcaseEffect::AddThumbnail { url, active } => add_thumbnail(handle, url, *active),
            ShowcaseEffect::SetActiveThumbnail(index) => {
                let thumbs = dom::query_all_in(&handle.panel, ".project-modal__thumbnail");
                for (i, thumb) in thumbs.iter().enumerate() {
                    if i == *index {
                        dom::add_class(thumb, "active");
                    } else {
                        dom::remove_class(thumb, "active");
                    }
                }
            }
            ShowcaseEffect::OpenModal => handle.modal.open(),
        }
    }
}

fn set_main_image(handle: &ShowcaseHandle, url: &str, alt: &str) {
    let Some(image) = dom::query_in(&handle.panel, ".project-modal__main-image img")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    image.set_src(url);
    image.set_alt(alt);
}

fn add_thumbnail(handle: &ShowcaseHandle, url: &str, active: bool) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(strip) = dom::query_in(&handle.panel, ".project-modal__thumbnails") else {
        return;
    };
    let Some(thumb) = dom::create(&document, "div", "project-modal__thumbnail", None) else {
        return;
    };
    if active {
        dom::add_class(&thumb, "active");
    }
    let index = dom::query_all_in(&handle.panel, ".project-modal__thumbnail").len();
    if let Ok(image) = document.create_element("img") {
        let _ = image.set_attribute("src", url);
        let _ = thumb.append_child(&image);
    }

    let handle = handle.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let effects = handle.state.borrow().select_thumbnail(index);
        apply(&handle, &effects);
    }) as Box<dyn FnMut(Event)>);
    let _ = thumb.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();

    let _ = strip.append_child(&thumb);
}
