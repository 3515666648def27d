//! Component controllers for the Vitrina behavior layer.
//!
//! Each module holds one controller: an explicitly constructed, owned state
//! machine with no DOM types and no cross-instance shared state. Controllers
//! take inputs (events, timestamps, visibility fractions) and return effect
//! values describing the DOM mutations to apply; the `vitrina` browser crate
//! interprets them.

pub mod carousel;
pub mod catalog;
pub mod comparison;
pub mod effects;
pub mod form;
pub mod modal;
pub mod nav;
pub mod typing;

pub use carousel::{Carousel, CarouselEffect};
pub use catalog::{ProjectCatalog, ProjectCategory, ProjectRecord, Showcase, ShowcaseEffect};
pub use comparison::ImageComparison;
pub use effects::{Counter, HeaderScroll, HeroSlideshow, Parallax, Reveal};
pub use form::{FormController, FormEffect, FormKind, SimulatedTransport, Transport};
pub use modal::{Modal, ModalEffect, ModalPhase};
pub use nav::{MobileNav, TabHighlighter};
pub use typing::Typing;
