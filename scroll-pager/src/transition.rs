use crate::Rect;

/// Identifies one issued [`Transition`].
///
/// Ids are unique per controller and increase monotonically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseOut,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// A request for the animation collaborator: move the indicator (and optionally the paged
/// container) to a new selection.
///
/// The controller stays `Animating` until [`crate::PagerController::finish_transition`] is
/// called with this transition's `id`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub id: TransitionId,
    /// An in-flight transition this one supersedes. Executors should stop playing it.
    pub replaces: Option<TransitionId>,
    pub from_index: usize,
    pub to_index: usize,
    /// Target indicator geometry in header coordinates.
    pub indicator: Rect,
    /// Target horizontal content offset for the paged container, when it should follow.
    pub scroll_to: Option<f32>,
    /// `0` for non-animated moves.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub fn is_animated(&self) -> bool {
        self.duration_ms > 0
    }
}
