//! Fonts and the text measurement seam.
//!
//! Layout only ever needs two numbers from a text engine: the advance width
//! of a single, unwrapped line and the font's line height. Anything that can
//! answer those implements [`MeasureText`]. `pinstrip-text` provides a shaping
//! implementation; [`MonospaceMeasurer`] is a font-free stand-in for headless
//! use and tests.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Pixel size.
    pub size: f32,
    pub weight: FontWeight,
    /// Line height as a multiple of `size`.
    pub line_height_scale: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self::regular(14.0)
    }
}

impl Font {
    pub const DEFAULT_LINE_HEIGHT_SCALE: f32 = 1.2;

    pub fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            line_height_scale: Self::DEFAULT_LINE_HEIGHT_SCALE,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_scale
    }

    /// Size must be finite and non-negative; the line height scale finite
    /// and positive.
    pub fn is_valid(&self) -> bool {
        self.size.is_finite()
            && self.size >= 0.0
            && self.line_height_scale.is_finite()
            && self.line_height_scale > 0.0
    }
}

pub trait MeasureText {
    /// Width of `text` laid out on one line, no wrapping.
    fn line_width(&self, text: &str, font: &Font) -> f32;

    fn line_height(&self, font: &Font) -> f32 {
        font.line_height()
    }
}

/// Every grapheme cluster advances by `font.size * advance_ratio`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl MeasureText for MonospaceMeasurer {
    fn line_width(&self, text: &str, font: &Font) -> f32 {
        let clusters = text.graphemes(true).count();
        clusters as f32 * font.size * self.advance_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_counts_graphemes_not_bytes() {
        let m = MonospaceMeasurer::default();
        let font = Font::regular(10.0);
        assert_eq!(m.line_width("abc", &font), 15.0);
        // thumbs up + skin tone is one cluster
        assert_eq!(m.line_width("a\u{1F44D}\u{1F3FD}", &font), 10.0);
        assert_eq!(m.line_width("", &font), 0.0);
    }

    #[test]
    fn line_height_follows_scale() {
        let font = Font::bold(20.0);
        assert_eq!(font.weight, FontWeight::Bold);
        assert!((MonospaceMeasurer::default().line_height(&font) - 24.0).abs() < 1e-4);
    }

    #[test]
    fn collapsed_line_height_is_invalid() {
        assert!(Font::bold(14.0).is_valid());
        assert!(Font::regular(0.0).is_valid());
        let flat = Font {
            line_height_scale: 0.0,
            ..Font::bold(14.0)
        };
        assert!(!flat.is_valid());
        let negative = Font {
            line_height_scale: -1.0,
            ..Font::bold(14.0)
        };
        assert!(!negative.is_valid());
    }
}
