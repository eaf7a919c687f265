use crate::{Font, FontWeight};

/// Measures rendered title widths.
///
/// Text shaping and font metrics belong to the host toolkit; the pager only needs a width to
/// size the indicator when [`crate::StyleConfig::indicator_matches_title_width`] is set.
///
/// Any `Fn(&str, &Font) -> f32` closure implements this trait.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: &Font) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &Font) -> f32,
{
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        self(text, font)
    }
}

/// A monospace approximation: every `char` advances `em * font.size`, bold by `bold_em`.
///
/// Good enough for terminal hosts and tests; GUI hosts should plug in their own metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub em: f32,
    pub bold_em: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            em: 0.5,
            bold_em: 0.55,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        let em = match font.weight {
            FontWeight::Regular => self.em,
            FontWeight::Bold => self.bold_em,
        };
        text.chars().count() as f32 * em * font.size
    }
}
