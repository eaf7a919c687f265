use crate::TransitionId;

/// Whether scroll-driven selection updates are currently accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A transition was issued and has not been reported finished yet.
    Animating { id: TransitionId },
}

impl Phase {
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// A lightweight, serializable snapshot of the pager's selection and geometry inputs.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    /// Meaningless while `segment_count == 0`.
    pub selected_index: usize,
    pub segment_count: usize,
    pub is_animating: bool,
    /// Header bounds.
    pub container_width: f32,
    pub container_height: f32,
    /// Paged container viewport (falls back to the header bounds when never set).
    pub viewport_width: f32,
    pub viewport_height: f32,
}
