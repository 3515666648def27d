//! Integration tests for vitrina-core.
//!
//! These tests verify the public API works correctly end-to-end.

use vitrina_core::validation::{validate_form, Field, FieldKind, FileMeta};
use vitrina_core::{cookie, format, query, Debounce, Rect, Throttle, Viewport};

// =============================================================================
// Validation Integration Tests
// =============================================================================

#[test]
fn test_contact_form_pass_and_fail() {
    let bad = vec![
        Field::text("name", FieldKind::Text, true, ""),
        Field::text("email", FieldKind::Email, true, "not-an-email"),
        Field::text("phone", FieldKind::Tel, false, ""),
    ];
    let report = validate_form(&bad);
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 2);

    let good = vec![
        Field::text("name", FieldKind::Text, true, "Ada Lovelace"),
        Field::text("email", FieldKind::Email, true, "user@example.com"),
        Field::text("phone", FieldKind::Tel, false, ""),
    ];
    assert!(validate_form(&good).is_valid());
}

#[test]
fn test_career_form_file_rules() {
    let cv = |mime: &str, size: u64| {
        Field::file(
            "cv",
            true,
            Some("image/*"),
            Some(FileMeta {
                name: "attachment.bin".to_string(),
                mime: mime.to_string(),
                size_bytes: size,
            }),
        )
    };

    assert!(validate_form(&[cv("image/png", 4 * 1024 * 1024)]).is_valid());
    assert!(!validate_form(&[cv("application/pdf", 1024)]).is_valid());
    assert!(!validate_form(&[cv("image/png", 6 * 1024 * 1024)]).is_valid());
}

// =============================================================================
// Viewport Math Integration Tests
// =============================================================================

#[test]
fn test_scrolling_element_into_view() {
    let viewport = Viewport::new(1280.0, 800.0, 0.0);
    // An element 400 px below the fold, in viewport-relative coordinates.
    let below_fold = Rect::new(100.0, 1200.0, 300.0, 200.0);
    assert_eq!(below_fold.visible_fraction(&viewport.rect()), 0.0);

    // After scrolling down 600 px the element sits at y=600, half visible.
    let partially = Rect::new(100.0, 600.0, 300.0, 400.0);
    let fraction = partially.visible_fraction(&viewport.rect());
    assert!((fraction - 0.5).abs() < 1e-9);
}

// =============================================================================
// Timing Integration Tests
// =============================================================================

#[test]
fn test_debounced_resize_handler() {
    let mut debounce = Debounce::new(250.0);
    // A burst of resize events; only the trailing call fires.
    for t in [0.0, 40.0, 90.0, 120.0] {
        debounce.on_call(t);
    }
    assert!(!debounce.should_fire(300.0));
    assert!(debounce.should_fire(370.0));
}

#[test]
fn test_throttled_scroll_handler() {
    let mut throttle = Throttle::new(100.0);
    let fired: Vec<bool> = (0..6).map(|i| throttle.on_call(f64::from(i) * 30.0)).collect();
    // 0 ms fires, 30/60/90 suppressed, 120 fires, 150 suppressed.
    assert_eq!(fired, vec![true, false, false, false, true, false]);
}

// =============================================================================
// Codec Integration Tests
// =============================================================================

#[test]
fn test_cookie_set_then_get() {
    let assignment = cookie::set_cookie_string("visited", "projects page", None, 0.0);
    let header = assignment
        .split(';')
        .next()
        .expect("assignment has a name=value part");
    assert_eq!(
        cookie::get_cookie(header, "visited"),
        Some("projects page".to_string())
    );
}

#[test]
fn test_query_string_from_campaign_link() {
    let params = query::parse_query("?utm_source=newsletter&utm_medium=email&ref=");
    assert_eq!(params.len(), 3);
    assert_eq!(
        query::query_param("utm_source=newsletter&ref=", "utm_source"),
        Some("newsletter".to_string())
    );
}

#[test]
fn test_date_formatting_for_news_entries() {
    let date = format::DateParts::new(2026, 8, 30, 0, 9, 30, 0).expect("valid date");
    assert_eq!(format::format_date(&date, "MMMM D, YYYY"), "August 30, 2026");
    assert_eq!(format::format_date(&date, "DDD, DD MMM YY"), "Sun, 30 Aug 26");
}
