use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::mem;

use crate::error::Result;
use crate::{
    PagerError, PagerLayout, PagerOptions, PagerState, Phase, Rect, Segment, Size, StyleConfig,
    Transition, TransitionId,
};

/// A headless segmented pager header.
///
/// This type is UI-agnostic:
/// - It does not hold any widgets; pages are opaque host handles (`P`).
/// - Your adapter feeds it taps, scroll offsets and bounds, and renders the [`PagerLayout`] it
///   computes.
/// - Indicator moves come out as [`Transition`] descriptors. The adapter plays them and reports
///   back with [`PagerController::finish_transition`].
///
/// Scroll updates from the paged container are ignored while a transition is in flight, so a
/// programmatic scroll started by a tap never feeds back into the selection.
///
/// All entry points must be called from the same thread (the host's UI thread).
#[derive(Clone, Debug)]
pub struct PagerController<P = ()> {
    options: PagerOptions,
    segments: Vec<Segment<P>>,
    selected_index: usize,
    phase: Phase,
    next_transition_id: u64,
    bounds: Size,
    viewport: Option<Size>,
    needs_layout: bool,
}

impl<P> Default for PagerController<P> {
    fn default() -> Self {
        Self::new(PagerOptions::default())
    }
}

impl<P> PagerController<P> {
    pub fn new(options: PagerOptions) -> Self {
        pdebug!(
            transition_duration_ms = options.transition_duration_ms,
            "PagerController::new"
        );
        Self {
            options,
            segments: Vec::new(),
            selected_index: 0,
            phase: Phase::Idle,
            next_transition_id: 0,
            bounds: Size::ZERO,
            viewport: None,
            needs_layout: true,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PagerOptions) {
        self.options = options;
        self.invalidate_layout();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PagerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_selection_changed(
        &mut self,
        on_selection_changed: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_selection_changed = on_selection_changed.map(|f| Arc::new(f) as _);
    }

    pub fn style(&self) -> &StyleConfig {
        &self.options.style
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        ptrace!(?style, "set_style");
        self.options.style = style;
        self.invalidate_layout();
    }

    pub fn update_style(&mut self, f: impl FnOnce(&mut StyleConfig)) {
        let mut next = self.options.style;
        f(&mut next);
        self.set_style(next);
    }

    /// Replaces all segments and resets the selection to the first one.
    ///
    /// An empty `items` is ignored; use [`Self::clear_segments`] to remove every segment.
    /// Any in-flight transition is dropped: its late completion will not be honored.
    pub fn set_segments(&mut self, items: Vec<Segment<P>>) {
        if items.is_empty() {
            ptrace!("set_segments: empty input ignored");
            return;
        }
        pdebug!(count = items.len(), "set_segments");
        self.segments = items;
        self.selected_index = 0;
        self.phase = Phase::Idle;
        self.invalidate_layout();
    }

    /// Installs title-only segments.
    pub fn set_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_segments(titles.into_iter().map(Segment::titled).collect());
    }

    pub fn clear_segments(&mut self) {
        pdebug!(prev_count = self.segments.len(), "clear_segments");
        self.segments.clear();
        self.selected_index = 0;
        self.phase = Phase::Idle;
        self.invalidate_layout();
    }

    pub fn segments(&self) -> &[Segment<P>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment<P>> {
        self.segments.get(index)
    }

    pub fn page(&self, index: usize) -> Option<&P> {
        self.segments.get(index)?.page.as_ref()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// `None` when no segments are installed.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.segments.is_empty()).then_some(self.selected_index)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Header bounds.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        let bounds = Size::new(width, height);
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.invalidate_layout();
    }

    /// Paged container viewport. Falls back to the header bounds until one is set.
    pub fn viewport(&self) -> Size {
        self.viewport.unwrap_or(self.bounds)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let viewport = Size::new(width, height);
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.invalidate_layout();
    }

    pub fn state(&self) -> PagerState {
        let viewport = self.viewport();
        PagerState {
            selected_index: self.selected_index,
            segment_count: self.segments.len(),
            is_animating: self.is_animating(),
            container_width: self.bounds.width,
            container_height: self.bounds.height,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }

    /// Horizontal content offset at which page `index` fills the paged container.
    pub fn page_offset(&self, index: usize) -> f32 {
        let viewport = self.viewport();
        if !viewport.is_usable() {
            return 0.0;
        }
        index as f32 * viewport.width
    }

    /// Selects `index` and returns the transition to play.
    ///
    /// Returns `Ok(None)` when `index` is already selected. When `sync_container` is set the
    /// transition also asks the paged container to scroll to the page.
    pub fn select_index(
        &mut self,
        index: usize,
        animated: bool,
        sync_container: bool,
    ) -> Result<Option<Transition>> {
        self.check_index(index)?;
        if index == self.selected_index {
            return Ok(None);
        }
        Ok(Some(self.move_to_index(index, animated, sync_container)))
    }

    /// Like [`Self::select_index`], but issues a transition even when `index` is already
    /// selected (e.g. to re-sync the paged container after the host resized it).
    pub fn select_index_forced(
        &mut self,
        index: usize,
        animated: bool,
        sync_container: bool,
    ) -> Result<Transition> {
        self.check_index(index)?;
        Ok(self.move_to_index(index, animated, sync_container))
    }

    /// Reports that the transition `id` finished playing.
    ///
    /// Returns `true` if this returned the controller to `Idle`. Completions of transitions that
    /// were replaced (or dropped by `set_segments`) are ignored.
    pub fn finish_transition(&mut self, id: TransitionId) -> bool {
        match self.phase {
            Phase::Animating { id: current } if current == id => {
                ptrace!(id = id.0, "finish_transition");
                self.phase = Phase::Idle;
                true
            }
            _ => {
                ptrace!(id = id.0, phase = ?self.phase, "finish_transition: stale id ignored");
                false
            }
        }
    }

    /// Feeds a scroll position update from the paged container.
    ///
    /// Ignored while animating. Otherwise the page under `offset_x` is selected (a page counts
    /// once it is at least half visible) and the observer is notified after the selection moved.
    /// The returned transition never scrolls the container.
    pub fn on_container_scrolled(
        &mut self,
        offset_x: f32,
        container_width: f32,
    ) -> Option<Transition> {
        if self.phase.is_animating() {
            ptrace!(offset_x, phase = ?self.phase, "on_container_scrolled: ignored while animating");
            return None;
        }
        let count = self.segments.len();
        if count == 0 {
            return None;
        }
        if !(container_width.is_finite() && container_width > 0.0) || !offset_x.is_finite() {
            pwarn!(
                offset_x,
                container_width,
                "on_container_scrolled: unusable scroll geometry"
            );
            return None;
        }
        self.track_viewport_width(container_width);

        let nearest = nearest_page(offset_x / container_width, count);
        if nearest == self.selected_index {
            return None;
        }
        let transition = self.move_to_index(nearest, true, false);
        self.notify_selection_changed(nearest);
        Some(transition)
    }

    /// Handles a tap on segment `index`.
    ///
    /// Tapping the selected segment does nothing. Otherwise the observer is notified first, then
    /// the selection moves and the paged container is asked to follow.
    pub fn on_segment_tapped(&mut self, index: usize) -> Result<Option<Transition>> {
        self.check_index(index)?;
        if index == self.selected_index {
            return Ok(None);
        }
        self.notify_selection_changed(index);
        Ok(Some(self.move_to_index(index, true, true)))
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn invalidate_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Lays out buttons, indicator and pages in a `width` x `height` container.
    ///
    /// Pure: the header and the paged container share the same size here. See
    /// [`Self::compute_layout_in`] when they differ.
    pub fn compute_layout(&self, width: f32, height: f32, style: &StyleConfig) -> PagerLayout {
        let size = Size::new(width, height);
        self.compute_layout_in(size, size, style)
    }

    /// Lays out buttons and the indicator in `bounds`, and pages in `viewport`.
    ///
    /// Returns an empty layout when there are no segments or `bounds` is unusable. An unusable
    /// `viewport` only leaves the page frames empty.
    pub fn compute_layout_in(
        &self,
        bounds: Size,
        viewport: Size,
        style: &StyleConfig,
    ) -> PagerLayout {
        let count = self.segments.len();
        if count == 0 || !bounds.is_usable() {
            return PagerLayout::empty();
        }

        let button_frames = (0..count)
            .map(|i| {
                let (x, width) = slot(bounds.width, count, i);
                Rect::new(x, 0.0, width, bounds.height)
            })
            .collect();

        let (page_frames, content_size) = if viewport.is_usable() {
            let pages = (0..count)
                .map(|i| Rect::new(i as f32 * viewport.width, 0.0, viewport.width, viewport.height))
                .collect();
            let content = Size::new(viewport.width * count as f32, viewport.height);
            (pages, content)
        } else {
            (Vec::new(), Size::ZERO)
        };

        PagerLayout {
            button_frames,
            indicator_frame: self.indicator_frame_for(self.selected_index, bounds, style),
            page_frames,
            content_size,
            selected_index: Some(self.selected_index),
        }
    }

    /// Computes the layout from the stored bounds, viewport and style, and clears
    /// [`Self::needs_layout`].
    pub fn layout(&mut self) -> PagerLayout {
        let layout = self.compute_layout_in(self.bounds, self.viewport(), &self.options.style);
        self.needs_layout = false;
        layout
    }

    /// Indicator geometry for the current selection in the stored bounds.
    pub fn indicator_frame(&self) -> Rect {
        self.indicator_frame_for(self.selected_index, self.bounds, &self.options.style)
    }

    fn indicator_frame_for(&self, index: usize, bounds: Size, style: &StyleConfig) -> Rect {
        let count = self.segments.len();
        if index >= count || !bounds.is_usable() {
            return Rect::ZERO;
        }
        let (slot_x, slot_width) = slot(bounds.width, count, index);
        let height = if style.indicator_height.is_nan() {
            0.0
        } else {
            style.indicator_height.clamp(0.0, bounds.height)
        };
        let y = bounds.height - height;

        if !style.indicator_matches_title_width {
            return Rect::new(slot_x, y, slot_width, height);
        }

        let measured = self
            .options
            .measure
            .text_width(&self.segments[index].title, &style.selected_font);
        let text_width = if measured.is_nan() {
            0.0
        } else {
            measured.clamp(0.0, slot_width)
        };
        Rect::new(
            slot_x + (slot_width - text_width) / 2.0,
            y,
            text_width,
            height,
        )
    }

    fn move_to_index(&mut self, index: usize, animated: bool, sync_container: bool) -> Transition {
        let from_index = mem::replace(&mut self.selected_index, index);
        let id = TransitionId(self.next_transition_id);
        self.next_transition_id = self.next_transition_id.wrapping_add(1);
        let replaces = match mem::replace(&mut self.phase, Phase::Animating { id }) {
            Phase::Animating { id: prev } => Some(prev),
            Phase::Idle => None,
        };

        let viewport = self.viewport();
        let scroll_to =
            (sync_container && viewport.is_usable()).then(|| index as f32 * viewport.width);
        let duration_ms = if animated {
            self.options.transition_duration_ms
        } else {
            0
        };
        let transition = Transition {
            id,
            replaces,
            from_index,
            to_index: index,
            indicator: self.indicator_frame(),
            scroll_to,
            duration_ms,
            easing: self.options.easing,
        };
        pdebug!(
            id = id.0,
            from_index,
            to_index = index,
            duration_ms,
            sync_container,
            "move_to_index"
        );
        self.invalidate_layout();
        transition
    }

    fn track_viewport_width(&mut self, width: f32) {
        let current = self.viewport();
        if current.width == width {
            return;
        }
        self.viewport = Some(Size::new(width, current.height));
        self.invalidate_layout();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.segments.len();
        if index < count {
            return Ok(());
        }
        pwarn!(index, count, "segment index out of range");
        Err(PagerError::IndexOutOfRange { index, count })
    }

    fn notify_selection_changed(&self, index: usize) {
        pdebug!(index, "selection changed");
        if let Some(cb) = &self.options.on_selection_changed {
            cb(index);
        }
    }
}

/// Slot `index` of `count` equal slots over `[0, width)`, as `(x, width)`.
///
/// Slot edges are computed independently so the slots tile the range without gaps.
fn slot(width: f32, count: usize, index: usize) -> (f32, f32) {
    let n = count as f32;
    let start = width * index as f32 / n;
    let end = if index + 1 >= count {
        width
    } else {
        width * (index + 1) as f32 / n
    };
    (start, end - start)
}

/// Rounds a fractional page position half-up and clamps it to a valid index.
fn nearest_page(raw: f32, count: usize) -> usize {
    let raw = raw.max(0.0);
    let whole = raw as usize;
    let fraction = raw - whole as f32;
    let rounded = if fraction >= 0.5 {
        whole.saturating_add(1)
    } else {
        whole
    };
    rounded.min(count.saturating_sub(1))
}
