/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const DARK_GRAY: Self = Self::rgb(85, 85, 85);
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A font request. Resolving it to real glyph metrics is the host's job (see
/// [`crate::TextMeasure`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// The color + font pair a segment title is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleStyle {
    pub color: Color,
    pub font: Font,
}

/// Visual configuration for the pager header.
///
/// Changing any field through [`crate::PagerController::set_style`] or
/// [`crate::PagerController::update_style`] invalidates the current geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleConfig {
    pub text_color: Color,
    pub selected_text_color: Color,
    pub font: Font,
    pub selected_font: Font,
    pub indicator_color: Color,
    pub indicator_height: f32,
    /// When `true`, the indicator is as wide as the selected title (measured with
    /// `selected_font`) and centered under it. Otherwise it spans the whole button.
    pub indicator_matches_title_width: bool,
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_color: Color::LIGHT_GRAY,
            selected_text_color: Color::DARK_GRAY,
            font: Font::regular(13.0),
            selected_font: Font::bold(13.0),
            indicator_color: Color::BLACK,
            indicator_height: 2.0,
            indicator_matches_title_width: false,
            border_color: None,
            border_width: 0.0,
        }
    }
}

impl StyleConfig {
    pub fn title_style(&self, selected: bool) -> TitleStyle {
        if selected {
            TitleStyle {
                color: self.selected_text_color,
                font: self.selected_font,
            }
        } else {
            TitleStyle {
                color: self.text_color,
                font: self.font,
            }
        }
    }

    pub fn with_text_colors(mut self, text_color: Color, selected_text_color: Color) -> Self {
        self.text_color = text_color;
        self.selected_text_color = selected_text_color;
        self
    }

    pub fn with_fonts(mut self, font: Font, selected_font: Font) -> Self {
        self.font = font;
        self.selected_font = selected_font;
        self
    }

    pub fn with_indicator_color(mut self, indicator_color: Color) -> Self {
        self.indicator_color = indicator_color;
        self
    }

    pub fn with_indicator_height(mut self, indicator_height: f32) -> Self {
        self.indicator_height = indicator_height;
        self
    }

    pub fn with_indicator_matches_title_width(mut self, matches: bool) -> Self {
        self.indicator_matches_title_width = matches;
        self
    }

    pub fn with_border(mut self, border_color: Option<Color>, border_width: f32) -> Self {
        self.border_color = border_color;
        self.border_width = border_width;
        self
    }
}
