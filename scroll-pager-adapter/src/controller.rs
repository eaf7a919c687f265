use alloc::vec::Vec;

use scroll_pager::{
    PagerController, PagerError, PagerLayout, PagerOptions, Rect, Segment, StyleConfig,
    Transition, TransitionId,
};

use crate::{RectTween, Tween};

/// One transition being played back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    pub id: TransitionId,
    pub indicator: RectTween,
    pub scroll: Option<Tween>,
}

/// What the host should draw after a [`Controller::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub indicator: Rect,
    /// New content offset for the paged container, when the transition drives it.
    pub scroll_offset: Option<f32>,
    /// `true` on the last frame of a transition.
    pub finished: bool,
}

/// A framework-neutral controller that wraps a [`PagerController`] and plays its transitions
/// with tweens.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_bounds` / `on_viewport` when the header or paged container is resized
/// - `on_tap` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick while [`Controller::is_animating`]
///
/// Completed transitions are reported back to the pager, so scroll tracking resumes as soon as
/// the last frame has been produced. Starting a new transition while one plays replaces it; the
/// new tween starts from whatever geometry is currently on screen.
#[derive(Clone, Debug)]
pub struct Controller<P = ()> {
    pager: PagerController<P>,
    playback: Option<Playback>,
    indicator: Rect,
    scroll_offset: f32,
}

impl<P> Controller<P> {
    pub fn new(options: PagerOptions) -> Self {
        Self::from_pager(PagerController::new(options))
    }

    pub fn from_pager(pager: PagerController<P>) -> Self {
        let indicator = pager.indicator_frame();
        Self {
            pager,
            playback: None,
            indicator,
            scroll_offset: 0.0,
        }
    }

    pub fn pager(&self) -> &PagerController<P> {
        &self.pager
    }

    /// Direct access to the pager. Transitions issued through it bypass playback; prefer the
    /// controller's own entry points.
    pub fn pager_mut(&mut self) -> &mut PagerController<P> {
        &mut self.pager
    }

    pub fn into_pager(self) -> PagerController<P> {
        self.pager
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// The indicator geometry currently on screen.
    pub fn indicator(&self) -> Rect {
        self.indicator
    }

    /// The last known content offset of the paged container.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Stops playback and jumps to the end state of the current transition.
    pub fn cancel_animation(&mut self) {
        let Some(playback) = self.playback.take() else {
            return;
        };
        atrace!(id = playback.id.0, "cancel_animation");
        self.indicator = playback.indicator.to;
        if let Some(scroll) = playback.scroll {
            self.scroll_offset = scroll.to;
        }
        self.pager.finish_transition(playback.id);
    }

    /// Replaces the segments. Playback is dropped and, if the paged container is away from the
    /// first page, a jump back to it is queued for the next `tick`.
    pub fn set_segments(&mut self, items: Vec<Segment<P>>) {
        if items.is_empty() {
            return;
        }
        self.pager.set_segments(items);
        self.return_to_first_page();
    }

    pub fn clear_segments(&mut self) {
        self.pager.clear_segments();
        self.return_to_first_page();
    }

    pub fn set_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<alloc::string::String>,
    {
        self.set_segments(titles.into_iter().map(Segment::titled).collect());
    }

    /// Call this when the header is resized.
    ///
    /// An idle indicator snaps to its new geometry; a playing one is re-aimed.
    pub fn on_bounds(&mut self, width: f32, height: f32, now_ms: u64) {
        self.pager.set_bounds(width, height);
        self.follow_geometry(now_ms);
    }

    pub fn on_viewport(&mut self, width: f32, height: f32) {
        self.pager.set_viewport(width, height);
    }

    /// Applies `style`. An idle indicator snaps to its new geometry; a playing one is re-aimed.
    pub fn set_style(&mut self, style: StyleConfig, now_ms: u64) {
        self.pager.set_style(style);
        self.follow_geometry(now_ms);
    }

    /// Call this after changing the style through [`Controller::pager_mut`].
    pub fn on_style_changed(&mut self, now_ms: u64) {
        self.follow_geometry(now_ms);
    }

    /// Handles a tap on segment `index`. Returns whether a transition started.
    pub fn on_tap(&mut self, index: usize, now_ms: u64) -> Result<bool, PagerError> {
        let transition = self.pager.on_segment_tapped(index)?;
        Ok(self.start(transition, now_ms))
    }

    /// Call this when the paged container reports a new content offset (user drag, or the echo
    /// of an offset this controller produced).
    ///
    /// Returns whether a transition started.
    pub fn on_scroll(&mut self, offset_x: f32, container_width: f32, now_ms: u64) -> bool {
        self.scroll_offset = offset_x;
        let transition = self.pager.on_container_scrolled(offset_x, container_width);
        self.start(transition, now_ms)
    }

    /// Programmatic selection. Returns whether a transition started.
    pub fn select_index(
        &mut self,
        index: usize,
        animated: bool,
        sync_container: bool,
        now_ms: u64,
    ) -> Result<bool, PagerError> {
        let transition = self.pager.select_index(index, animated, sync_container)?;
        Ok(self.start(transition, now_ms))
    }

    /// Advances playback.
    ///
    /// Returns `None` when nothing is playing. The frame flagged `finished` is the last one of a
    /// transition; by then the pager is back to accepting scroll updates.
    pub fn tick(&mut self, now_ms: u64) -> Option<Frame> {
        let playback = self.playback?;

        self.indicator = playback.indicator.sample(now_ms);
        let scroll_offset = playback.scroll.map(|tween| tween.sample(now_ms));
        if let Some(offset) = scroll_offset {
            self.scroll_offset = offset;
        }

        let finished = playback.indicator.is_done(now_ms)
            && playback.scroll.is_none_or(|tween| tween.is_done(now_ms));
        if finished {
            self.playback = None;
            self.pager.finish_transition(playback.id);
            atrace!(id = playback.id.0, now_ms, "transition finished");
        }

        Some(Frame {
            indicator: self.indicator,
            scroll_offset,
            finished,
        })
    }

    /// The pager layout, with the indicator at its on-screen (possibly mid-flight) position.
    pub fn layout(&mut self) -> PagerLayout {
        let mut layout = self.pager.layout();
        if !layout.is_empty() {
            layout.indicator_frame = self.indicator;
        }
        layout
    }

    fn start(&mut self, transition: Option<Transition>, now_ms: u64) -> bool {
        let Some(t) = transition else {
            return false;
        };
        #[cfg(feature = "tracing")]
        if let Some(prev) = &self.playback {
            adebug!(
                replaced = prev.id.0,
                by = t.id.0,
                "replacing in-flight transition"
            );
        }
        // A replaced playback that was moving the container must not leave it between pages.
        let was_scrolling = self
            .playback
            .take()
            .is_some_and(|prev| prev.scroll.is_some());
        let scroll_to = t
            .scroll_to
            .or_else(|| was_scrolling.then(|| self.pager.page_offset(t.to_index)));
        atrace!(
            id = t.id.0,
            to_index = t.to_index,
            duration_ms = t.duration_ms,
            ?scroll_to,
            "start transition"
        );
        self.playback = Some(Playback {
            id: t.id,
            indicator: RectTween::new(self.indicator, t.indicator, now_ms, t.duration_ms, t.easing),
            scroll: scroll_to.map(|to| {
                Tween::new(self.scroll_offset, to, now_ms, t.duration_ms, t.easing)
            }),
        });
        true
    }

    fn return_to_first_page(&mut self) {
        self.playback = None;
        self.indicator = self.pager.indicator_frame();
        if self.scroll_offset == 0.0 {
            return;
        }
        adebug!(from = self.scroll_offset, "segments replaced, returning to first page");
        // Zero duration: the jump completes on the first tick, whatever its timestamp.
        let transition = self.pager.select_index_forced(0, false, true).ok();
        self.start(transition, 0);
    }

    fn follow_geometry(&mut self, now_ms: u64) {
        let target = self.pager.indicator_frame();
        match self.playback.as_mut() {
            Some(playback) => playback.indicator.retarget(now_ms, target),
            None => self.indicator = target,
        }
    }
}
