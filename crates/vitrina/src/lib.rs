//! Vitrina: the client-side behavior layer for the Maxwell Consultancy
//! marketing site, compiled to WebAssembly.
//!
//! The heavy lifting lives in two platform-independent crates:
//! [`vitrina_core`] (geometry, events, validation, codecs) and
//! [`vitrina_components`] (one owned controller per UI component). This
//! crate is the browser runtime: it locates DOM targets by the site's
//! class-name and attribute conventions, translates web events into core
//! events, drives the controllers, and applies the effects they return.
//!
//! Every component initializer exits early and silently when its expected
//! markup is absent; the worst failure mode is an inert widget.

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use vitrina_components::{
    Carousel, Counter, FormController, FormKind, HeaderScroll, HeroSlideshow, ImageComparison,
    MobileNav, Modal, Parallax, ProjectCatalog, ProjectCategory, Reveal, Showcase,
    SimulatedTransport, TabHighlighter, Transport, Typing,
};
pub use vitrina_core::{Debounce, Event, Key, Point, Rect, Size, Throttle, Viewport};
