use alloc::sync::Arc;

use crate::{Easing, FixedAdvance, StyleConfig, TextMeasure};

/// A callback fired when the selected segment changes because of user input (a tap or a
/// scroll drag).
///
/// The argument is the newly selected index.
pub type SelectionChangedCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Shared text metrics provider.
pub type SharedTextMeasure = Arc<dyn TextMeasure + Send + Sync>;

/// Default indicator transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Configuration for [`crate::PagerController`].
///
/// Cheap to clone: the measure and callback live behind `Arc`s, so adapters can tweak a field
/// and hand the options back through `PagerController::set_options`.
pub struct PagerOptions {
    pub style: StyleConfig,
    pub measure: SharedTextMeasure,
    pub on_selection_changed: Option<SelectionChangedCallback>,
    /// Duration of animated indicator moves.
    pub transition_duration_ms: u64,
    pub easing: Easing,
}

impl Clone for PagerOptions {
    fn clone(&self) -> Self {
        Self {
            style: self.style,
            measure: Arc::clone(&self.measure),
            on_selection_changed: self.on_selection_changed.clone(),
            transition_duration_ms: self.transition_duration_ms,
            easing: self.easing,
        }
    }
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::new(FixedAdvance::default())
    }
}

impl PagerOptions {
    pub fn new(measure: impl TextMeasure + Send + Sync + 'static) -> Self {
        Self {
            style: StyleConfig::default(),
            measure: Arc::new(measure),
            on_selection_changed: None,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn with_measure(mut self, measure: impl TextMeasure + Send + Sync + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    pub fn with_on_selection_changed(
        mut self,
        on_selection_changed: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selection_changed = on_selection_changed.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_transition(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.transition_duration_ms = duration_ms;
        self.easing = easing;
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("style", &self.style)
            .field("has_on_selection_changed", &self.on_selection_changed.is_some())
            .field("transition_duration_ms", &self.transition_duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
