//! Core types and utilities for the Vitrina behavior layer.
//!
//! This crate provides the platform-independent foundation used throughout
//! Vitrina:
//! - Geometric primitives and viewport math: [`Point`], [`Size`], [`Rect`],
//!   [`Viewport`]
//! - Input events: [`Event`], [`Key`]
//! - Easing: [`Easing`]
//! - Call-rate policies: [`Debounce`], [`Throttle`]
//! - Formatting, cookie and query-string codecs
//! - The unified form validation framework ([`validation`])

pub mod cookie;
mod easing;
mod event;
pub mod format;
mod geometry;
pub mod query;
mod timing;
pub mod validation;

pub use easing::{ease_scroll, Easing};
pub use event::{Event, Key};
pub use geometry::{is_in_viewport, Point, Rect, Size, Viewport};
pub use timing::{Debounce, Throttle};
