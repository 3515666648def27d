//! Modal dialog wiring: triggers, dismissal paths, and effect application.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlVideoElement, KeyboardEvent};

use vitrina_components::modal::{Modal, ModalEffect};
use vitrina_core::{Event as CoreEvent, Key};

use super::{dom, events, timers};

/// A live modal panel paired with its controller.
#[derive(Clone)]
pub struct ModalHandle {
    panel: Element,
    state: Rc<RefCell<Modal>>,
}

impl ModalHandle {
    fn bind(panel: Element) -> Self {
        Self {
            panel,
            state: Rc::new(RefCell::new(Modal::new())),
        }
    }

    /// The element id of the panel, if it has one.
    #[must_use]
    pub fn id(&self) -> String {
        self.panel.id()
    }

    /// Whether the panel currently carries the shown class.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        let state = self.state.borrow();
        state.is_shown() || state.phase() == vitrina_components::modal::ModalPhase::Opening
    }

    /// Open the panel.
    pub fn open(&self) {
        let effects = self.state.borrow_mut().open(timers::now_ms());
        self.apply(&effects);
        self.schedule_tick();
    }

    /// Begin dismissal.
    pub fn close(&self) {
        let effects = self.state.borrow_mut().request_close(timers::now_ms());
        self.apply(&effects);
        self.schedule_tick();
    }

    fn schedule_tick(&self) {
        let Some(deadline) = self.state.borrow().deadline() else {
            return;
        };
        let handle = self.clone();
        let delay = deadline - timers::now_ms();
        if let Some(timeout) = timers::Timeout::new(delay, move || {
            let effects = handle.state.borrow_mut().tick(timers::now_ms());
            handle.apply(&effects);
        }) {
            timeout.forget();
        }
    }

    fn apply(&self, effects: &[ModalEffect]) {
        for effect in effects {
            match effect {
                ModalEffect::Display => dom::set_style(&self.panel, "display", "flex"),
                ModalEffect::Hide => dom::set_style(&self.panel, "display", "none"),
                ModalEffect::AddShownClass => dom::add_class(&self.panel, "show"),
                ModalEffect::RemoveShownClass => dom::remove_class(&self.panel, "show"),
                ModalEffect::AddBodyFlag => set_body_flag(true),
                ModalEffect::RemoveBodyFlag => set_body_flag(false),
                ModalEffect::PauseVideo => {
                    if let Some(video) = dom::query_in(&self.panel, "video")
                        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
                    {
                        let _ = video.pause();
                    }
                }
            }
        }
    }
}

fn set_body_flag(on: bool) {
    if let Some(body) = dom::document().and_then(|d| dom::body(&d)) {
        if on {
            dom::add_class(&body, "modal-open");
        } else {
            dom::remove_class(&body, "modal-open");
        }
    }
}

/// Bind every `.modal` panel on the page, wire its dismissal paths and the
/// page's modal triggers, and return the handles for other components.
pub fn init() -> Vec<ModalHandle> {
    let Some(document) = dom::document() else {
        return Vec::new();
    };

    let handles: Vec<ModalHandle> = dom::query_all(&document, ".modal")
        .into_iter()
        .map(ModalHandle::bind)
        .collect();

    for handle in &handles {
        // Close button inside the panel.
        if let Some(button) = dom::query_in(&handle.panel, ".modal__close") {
            let handle = handle.clone();
            let closure = Closure::wrap(Box::new(move |_: Event| {
                handle.close();
            }) as Box<dyn FnMut(Event)>);
            let _ =
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Backdrop: a click landing on the panel itself, not its content.
        {
            let handle = handle.clone();
            let panel = handle.panel.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let on_backdrop = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| el == panel);
                if on_backdrop {
                    handle.close();
                }
            }) as Box<dyn FnMut(Event)>);
            let _ = handle
                .panel
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // Escape dismisses whichever modal is up.
    {
        let handles = handles.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let CoreEvent::KeyDown { key: Key::Escape } = events::keyboard_event_to_core(&event)
            else {
                return;
            };
            for handle in &handles {
                if handle.is_shown() {
                    handle.close();
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Declarative triggers: anchors carrying data-toggle="modal" whose href
    // (or data-target) names the panel.
    for trigger in dom::query_all(&document, "[data-toggle=\"modal\"]") {
        let target_id = trigger
            .get_attribute("data-target")
            .or_else(|| trigger.get_attribute("href"))
            .map(|t| t.trim_start_matches('#').to_string());
        let Some(target_id) = target_id else {
            continue;
        };
        let Some(handle) = handles.iter().find(|h| h.id() == target_id).cloned() else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            handle.open();
        }) as Box<dyn FnMut(Event)>);
        let _ = trigger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    handles
}
