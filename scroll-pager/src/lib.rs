//! A headless segmented pager header.
//!
//! For adapter-level utilities (tween playback of transitions), see the `scroll-pager-adapter`
//! crate.
//!
//! The pager keeps a row of segment buttons, a sliding selection indicator, and a horizontally
//! paged container in sync. Selection can come from two independent sources, button taps and
//! scroll drags of the container, and the controller makes sure they never fight each other.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - header bounds and paged container viewport size
//! - tap and scroll events
//! - text metrics (see [`TextMeasure`])
//! - playback of [`Transition`]s, reporting completion via
//!   [`PagerController::finish_transition`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod measure;
mod options;
mod pager;
mod state;
mod style;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use error::{PagerError, Result};
pub use measure::{FixedAdvance, TextMeasure};
pub use options::{
    DEFAULT_TRANSITION_MS, PagerOptions, SelectionChangedCallback, SharedTextMeasure,
};
pub use pager::PagerController;
pub use state::{PagerState, Phase};
pub use style::{Color, Font, FontWeight, StyleConfig, TitleStyle};
pub use transition::{Easing, Transition, TransitionId};
pub use types::{PagerLayout, Rect, Segment, Size};
