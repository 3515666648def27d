//! Form wiring: field collection, inline errors, busy state, and the
//! simulated submission round trip.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use vitrina_components::form::{
    BusyIndicator, FormController, FormEffect, FormKind, MessageKind, SimulatedTransport,
    Transport,
};
use vitrina_core::validation::{validate_field, Field, FieldKind, FileMeta, FormReport};

use super::{dom, timers};

const FILE_PLACEHOLDER: &str = "No file chosen";

/// A live form paired with its controller and transport.
#[derive(Clone)]
struct FormHandle {
    form: HtmlFormElement,
    state: Rc<RefCell<FormController>>,
    transport: Rc<RefCell<SimulatedTransport>>,
    original_label: Rc<RefCell<Option<String>>>,
}

/// Wire every known form on the page.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let known = [
        ("#contact-form", FormKind::Contact),
        ("#newsletter-form", FormKind::Newsletter),
        ("#career-application-form", FormKind::Career),
    ];
    for (selector, kind) in known {
        let Some(form) = dom::query(&document, selector)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            continue;
        };
        wire(form, kind);
    }
}

fn wire(form: HtmlFormElement, kind: FormKind) {
    let handle = FormHandle {
        form,
        state: Rc::new(RefCell::new(FormController::new(kind))),
        transport: Rc::new(RefCell::new(SimulatedTransport::new())),
        original_label: Rc::new(RefCell::new(None)),
    };

    {
        let handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let fields = collect_fields(&handle.form);
            let effects = handle.state.borrow_mut().submit(&fields);
            apply_effects(&handle, &effects);
        }) as Box<dyn FnMut(Event)>);
        let _ = handle
            .form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    wire_live_validation(&handle);
    if kind == FormKind::Career {
        wire_file_chrome(&handle);
    }
}

/// Validate a single field when the visitor leaves it.
fn wire_live_validation(handle: &FormHandle) {
    let form_root: &Element = handle.form.as_ref();
    for control in dom::query_all_in(form_root, "input, textarea, select") {
        let control_el = control.clone();
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let Some(field) = read_field(&control_el) else {
                return;
            };
            clear_error_on(&control_el);
            let result = validate_field(&field);
            if let Some(message) = result.error() {
                show_error_on(&control_el, message);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = control.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Custom file-input chrome: a visible button plus a file-name label in
/// front of the hidden native control.
fn wire_file_chrome(handle: &FormHandle) {
    let form_root: &Element = handle.form.as_ref();
    let Some(input) = dom::query_in(form_root, "input[type=\"file\"]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    if let Some(button) = dom::query_in(form_root, ".form__file-button") {
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            input.click();
        }) as Box<dyn FnMut(Event)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let handle = handle.clone();
    let input_el = input.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let name = input_el
            .files()
            .and_then(|files| files.get(0))
            .map_or_else(|| FILE_PLACEHOLDER.to_string(), |file| file.name());
        let form_root: &Element = handle.form.as_ref();
        if let Some(label) = dom::query_in(form_root, ".form__file-name") {
            label.set_text_content(Some(&name));
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Read every named control in the form into validator fields.
fn collect_fields(form: &HtmlFormElement) -> Vec<Field> {
    let form_root: &Element = form.as_ref();
    dom::query_all_in(form_root, "input, textarea, select")
        .iter()
        .filter_map(read_field)
        .collect()
}

fn read_field(control: &Element) -> Option<Field> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        let name = input.name();
        if name.is_empty() {
            return None;
        }
        let kind = match input.type_().as_str() {
            "submit" | "button" | "reset" => return None,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "file" => {
                let meta = input.files().and_then(|files| files.get(0)).map(|file| {
                    FileMeta {
                        name: file.name(),
                        mime: file.type_(),
                        size_bytes: file.size() as u64,
                    }
                });
                return Some(Field::file(
                    &name,
                    input.required(),
                    input.get_attribute("accept").as_deref(),
                    meta,
                ));
            }
            _ => FieldKind::Text,
        };
        let value = input.value();
        return Some(Field::text(&name, kind, input.required(), value.trim()));
    }
    if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        let name = area.name();
        if name.is_empty() {
            return None;
        }
        let value = area.value();
        return Some(Field::text(
            &name,
            FieldKind::TextArea,
            area.required(),
            value.trim(),
        ));
    }
    if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        let name = select.name();
        if name.is_empty() {
            return None;
        }
        return Some(Field::text(
            &name,
            FieldKind::Select,
            select.required(),
            &select.value(),
        ));
    }
    None
}

fn apply_effects(handle: &FormHandle, effects: &[FormEffect]) {
    for effect in effects {
        match effect {
            FormEffect::ClearErrors => clear_errors(&handle.form),
            FormEffect::ShowErrors(report) => show_errors(&handle.form, report),
            FormEffect::DisableSubmit => set_submit_disabled(handle, true),
            FormEffect::RestoreSubmit => restore_submit(handle),
            FormEffect::ShowBusy(indicator) => show_busy(handle, *indicator),
            FormEffect::Send(payload) => {
                let now = timers::now_ms();
                let ready_at = handle.transport.borrow_mut().send(payload.clone(), now);
                schedule_poll(handle.clone(), ready_at - now);
            }
            FormEffect::ResetForm => handle.form.reset(),
            FormEffect::ResetFileLabel => {
                let form_root: &Element = handle.form.as_ref();
                if let Some(label) = dom::query_in(form_root, ".form__file-name") {
                    label.set_text_content(Some(FILE_PLACEHOLDER));
                }
            }
            FormEffect::ShowMessage { text, kind } => show_message(&handle.form, text, *kind),
            FormEffect::FadeMessage => {
                let form_root: &Element = handle.form.as_ref();
                if let Some(banner) = dom::query_in(form_root, ".form__message") {
                    dom::add_class(&banner, "form__message--fade-out");
                }
            }
            FormEffect::RemoveMessage => {
                let form_root: &Element = handle.form.as_ref();
                if let Some(banner) = dom::query_in(form_root, ".form__message") {
                    banner.remove();
                }
            }
        }
    }
}

fn schedule_poll(handle: FormHandle, delay_ms: f64) {
    if let Some(timeout) = timers::Timeout::new(delay_ms, move || {
        let Some(result) = handle.transport.borrow_mut().poll(timers::now_ms()) else {
            return;
        };
        let effects = handle.state.borrow_mut().complete(result, timers::now_ms());
        apply_effects(&handle, &effects);
        schedule_banner_tick(handle.clone());
    }) {
        timeout.forget();
    }
}

fn schedule_banner_tick(handle: FormHandle) {
    let Some(deadline) = handle.state.borrow().next_deadline() else {
        return;
    };
    let delay = deadline - timers::now_ms();
    if let Some(timeout) = timers::Timeout::new(delay, move || {
        let effects = handle.state.borrow_mut().tick(timers::now_ms());
        apply_effects(&handle, &effects);
        schedule_banner_tick(handle.clone());
    }) {
        timeout.forget();
    }
}

fn submit_control(handle: &FormHandle) -> Option<HtmlElement> {
    let form_root: &Element = handle.form.as_ref();
    dom::query_in(form_root, "[type=\"submit\"]").and_then(|el| dom::html(&el))
}

fn set_submit_disabled(handle: &FormHandle, disabled: bool) {
    if let Some(control) = submit_control(handle) {
        if let Some(button) = control.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        }
    }
}

fn show_busy(handle: &FormHandle, indicator: BusyIndicator) {
    let Some(control) = submit_control(handle) else {
        return;
    };
    if handle.original_label.borrow().is_none() {
        *handle.original_label.borrow_mut() = Some(control.inner_html());
    }
    match indicator {
        BusyIndicator::Label(text) => control.set_text_content(Some(text)),
        BusyIndicator::LoadingDots => control.set_inner_html(
            "<span class=\"loading-dots\"><span></span><span></span><span></span></span>",
        ),
    }
}

fn restore_submit(handle: &FormHandle) {
    set_submit_disabled(handle, false);
    if let Some(label) = handle.original_label.borrow_mut().take() {
        if let Some(control) = submit_control(handle) {
            control.set_inner_html(&label);
        }
    }
}

/// Insert the form's status banner, replacing any previous one, and bring it
/// into view.
pub fn show_message(form: &HtmlFormElement, text: &str, kind: MessageKind) {
    let Some(document) = dom::document() else {
        return;
    };
    let form_root: &Element = form.as_ref();
    // One banner at a time.
    if let Some(existing) = dom::query_in(form_root, ".form__message") {
        existing.remove();
    }
    let class = match kind {
        MessageKind::Success => "form__message form__message--success",
        MessageKind::Error => "form__message form__message--error",
    };
    if let Some(banner) = dom::create(&document, "div", class, Some(text)) {
        let _ = form_root.append_child(&banner);
        // On long forms the banner lands below the fold.
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        banner.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn clear_errors(form: &HtmlFormElement) {
    let form_root: &Element = form.as_ref();
    for node in dom::query_all_in(form_root, ".form__error") {
        node.remove();
    }
    for control in dom::query_all_in(form_root, ".form__input--error") {
        dom::remove_class(&control, "form__input--error");
    }
}

fn show_errors(form: &HtmlFormElement, report: &FormReport) {
    let form_root: &Element = form.as_ref();
    for error in &report.errors {
        let selector = format!("[name=\"{}\"]", error.name);
        if let Some(control) = dom::query_in(form_root, &selector) {
            show_error_on(&control, &error.message);
        }
    }
}

fn show_error_on(control: &Element, message: &str) {
    dom::add_class(control, "form__input--error");
    let Some(document) = dom::document() else {
        return;
    };
    let Some(error) = dom::create(&document, "div", "form__error", Some(message)) else {
        return;
    };
    // Errors land at the end of the field's group, falling back to the
    // control's parent.
    let anchor = control
        .closest(".form__group")
        .ok()
        .flatten()
        .or_else(|| control.parent_element());
    if let Some(anchor) = anchor {
        let _ = anchor.append_child(&error);
    }
}

fn clear_error_on(control: &Element) {
    dom::remove_class(control, "form__input--error");
    let anchor = control
        .closest(".form__group")
        .ok()
        .flatten()
        .or_else(|| control.parent_element());
    if let Some(anchor) = anchor {
        for node in dom::query_all_in(&anchor, ".form__error") {
            node.remove();
        }
    }
}
