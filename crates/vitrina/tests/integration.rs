//! Integration tests for the vitrina facade.
//!
//! Everything the browser modules drive is re-exported at the crate root;
//! these tests walk component flows through that surface on the native
//! target, the way a page session would.

use vitrina::{
    Carousel, FormController, FormKind, HeaderScroll, MobileNav, Modal, Showcase,
    SimulatedTransport, TabHighlighter, Transport,
};
use vitrina_components::catalog::ShowcaseEffect;
use vitrina_components::form::FormEffect;
use vitrina_components::nav::Section;
use vitrina_core::validation::{Field, FieldKind};

// =============================================================================
// Page Session Flow
// =============================================================================

#[test]
fn test_scrolling_page_session() {
    // Landing page: image hero, so the header shrinks at 100 px.
    let mut header = HeaderScroll::new(100.0);
    let mut tabs = TabHighlighter::new(vec![
        Section {
            id: "buildings".into(),
            top: 600.0,
        },
        Section {
            id: "airports".into(),
            top: 1800.0,
        },
    ]);

    assert_eq!(header.on_scroll(80.0), None);
    assert_eq!(header.on_scroll(120.0), Some(true));
    assert_eq!(tabs.on_scroll(120.0), None);

    // Deep in the page both the header state and the active tab hold.
    assert_eq!(header.on_scroll(1700.0), None);
    assert_eq!(tabs.on_scroll(1700.0), Some(Some("airports".into())));

    // Back to the top: header releases, no tab active.
    assert_eq!(header.on_scroll(0.0), Some(false));
    assert_eq!(tabs.on_scroll(0.0), Some(None));
}

#[test]
fn test_mobile_menu_closed_by_desktop_resize() {
    let mut nav = MobileNav::new();
    nav.toggle();
    assert!(nav.is_open());
    // Rotating the device past the breakpoint collapses the menu.
    assert!(nav.resize(1024.0));
    assert!(!nav.is_open());
}

// =============================================================================
// Project Browsing Flow
// =============================================================================

#[test]
fn test_card_click_opens_populated_modal() {
    let mut showcase = Showcase::builtin();
    let mut modal = Modal::new();

    let effects = showcase.activate("kigali-airport");
    assert_eq!(effects.last(), Some(&ShowcaseEffect::OpenModal));

    // The OpenModal effect drives the shared modal controller.
    modal.open(1000.0);
    modal.tick(1010.0);
    assert!(modal.is_shown());

    // Escape dismisses; the panel is gone 300 ms later.
    modal.request_close(2000.0);
    assert!(!modal.tick(2300.0).is_empty());
    assert!(!modal.is_shown());
}

#[test]
fn test_carousel_survives_a_full_hover_cycle() {
    let mut carousel = Carousel::new(3);
    carousel.on_timer();
    carousel.pointer_enter();
    assert!(!carousel.autoplay());
    carousel.go_to(2);
    carousel.pointer_leave();
    assert!(carousel.autoplay());
    assert_eq!(carousel.current(), 2);
    assert_eq!(carousel.offset_percent(), -200.0);
}

// =============================================================================
// Contact Form Flow
// =============================================================================

#[test]
fn test_contact_submission_round_trip() {
    let mut controller = FormController::new(FormKind::Contact);
    let mut transport = SimulatedTransport::new();
    let fields = vec![
        Field::text("name", FieldKind::Text, true, "Ada"),
        Field::text("email", FieldKind::Email, true, "ada@example.com"),
        Field::text("phone", FieldKind::Tel, false, ""),
        Field::text("message", FieldKind::TextArea, true, "Hello"),
    ];

    let effects = controller.submit(&fields);
    let payload = effects
        .into_iter()
        .find_map(|e| match e {
            FormEffect::Send(p) => Some(p),
            _ => None,
        })
        .expect("valid fields produce a payload");
    assert_eq!(payload.destination, "/api/contact");

    let ready_at = transport.send(payload, 0.0);
    assert_eq!(ready_at, 1500.0);
    let result = transport.poll(ready_at).expect("delivery at the deadline");
    let effects = controller.complete(result, ready_at);
    assert!(effects.contains(&FormEffect::ResetForm));
    assert!(!controller.is_submitting());
}
