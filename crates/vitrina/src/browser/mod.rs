//! Browser runtime: binds component controllers to live DOM.
//!
//! Each submodule owns the wiring for one component family. All of them
//! follow the same shape: locate targets by the site's markup conventions,
//! exit silently when the structure is absent, and apply controller effects
//! as class toggles, style writes, and node mutations.

pub mod app;
pub mod carousel;
pub mod cookies;
pub mod dom;
pub mod effects;
pub mod events;
pub mod forms;
pub mod modals;
pub mod nav;
pub mod showcase;
pub mod timers;

pub use app::start;
