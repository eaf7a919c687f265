use scroll_pager::{Easing, Rect};

/// A small scalar tween for adapter-driven animation (e.g. a container's content offset).
///
/// A zero `duration_ms` is allowed and means "jump": the tween is done immediately and samples
/// to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let Some(eased) = eased_progress(self.start_ms, self.duration_ms, self.easing, now_ms)
        else {
            return self.to;
        };
        lerp(self.from, self.to, eased)
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// Tweens all four edges of a rectangle with one shared timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectTween {
    pub from: Rect,
    pub to: Rect,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl RectTween {
    pub fn new(from: Rect, to: Rect, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> Rect {
        let Some(t) = eased_progress(self.start_ms, self.duration_ms, self.easing, now_ms) else {
            return self.to;
        };
        Rect::new(
            lerp(self.from.x, self.to.x, t),
            lerp(self.from.y, self.to.y, t),
            lerp(self.from.width, self.to.width, t),
            lerp(self.from.height, self.to.height, t),
        )
    }

    /// Keeps the remaining duration but aims at `new_to` from the current sample.
    pub fn retarget(&mut self, now_ms: u64, new_to: Rect) {
        let remaining = self
            .duration_ms
            .saturating_sub(now_ms.saturating_sub(self.start_ms));
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, remaining, self.easing);
    }
}

/// `None` once the timeline is complete.
fn eased_progress(start_ms: u64, duration_ms: u64, easing: Easing, now_ms: u64) -> Option<f32> {
    let elapsed = now_ms.saturating_sub(start_ms);
    if elapsed >= duration_ms {
        return None;
    }
    let t = (elapsed as f32 / duration_ms as f32).clamp(0.0, 1.0);
    Some(easing.sample(t))
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
