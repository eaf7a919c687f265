use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether this size can host a layout: finite, positive width and finite, non-negative
    /// height.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height >= 0.0
    }
}

/// An axis-aligned rectangle in the host's coordinate space (origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open horizontal containment: `x <= px < max_x`.
    pub fn contains_x(&self, px: f32) -> bool {
        px >= self.x && px < self.max_x()
    }
}

/// One selectable title plus the host's page handle for it.
///
/// `P` is whatever the host uses to refer to a page view (a widget id, a boxed view, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<P = ()> {
    pub title: String,
    pub page: Option<P>,
}

impl<P> Segment<P> {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page: None,
        }
    }

    pub fn with_page(title: impl Into<String>, page: P) -> Self {
        Self {
            title: title.into(),
            page: Some(page),
        }
    }
}

/// Geometry for one layout pass. Nothing here is cached by the controller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerLayout {
    /// One frame per segment button, tiling the header bounds left to right.
    pub button_frames: Vec<Rect>,
    /// The selection indicator, anchored to the bottom edge of the header.
    pub indicator_frame: Rect,
    /// One frame per page inside the paged container's content.
    pub page_frames: Vec<Rect>,
    /// Content size the paged container should scroll over.
    pub content_size: Size,
    /// `None` when there is nothing to lay out.
    pub selected_index: Option<usize>,
}

impl PagerLayout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.button_frames.is_empty()
    }
}
