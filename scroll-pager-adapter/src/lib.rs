//! Adapter utilities for the `scroll-pager` crate.
//!
//! The `scroll-pager` crate is UI-agnostic and only describes indicator moves as
//! [`scroll_pager::Transition`]s. This crate provides small, framework-neutral helpers for
//! playing them back:
//!
//! - Tweens for scalars (container content offset) and rectangles (indicator frame)
//! - A [`Controller`] that plays transitions on `tick(now_ms)` and reports completion to the
//!   pager
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;


pub use controller::{Controller, Frame, Playback};
pub use tween::{RectTween, Tween};
