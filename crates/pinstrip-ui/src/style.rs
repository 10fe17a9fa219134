use pinstrip_core::{AnimationSpec, Color, Error, Font, Result};

/// Flat style snapshot for a [`SegmentControl`](crate::SegmentControl).
///
/// Replacing the style on a control relays out every segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentStyle {
    /// Fill of the pill under the selected title.
    pub cover_background_color: Color,
    /// Gap between neighbouring segments.
    pub title_margin: f32,
    pub title_padding_horizontal: f32,
    /// Added to the line height to get the cover height.
    pub title_padding_vertical: f32,
    pub title_font: Font,
    pub normal_title_color: Color,
    pub selected_title_color: Color,
    /// Indicator slide and programmatic scroll.
    pub animation: AnimationSpec,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            cover_background_color: Color::from_white(0.95, 1.0),
            title_margin: 15.0,
            title_padding_horizontal: 14.0,
            title_padding_vertical: 14.0,
            title_font: Font::bold(14.0),
            normal_title_color: Color::LIGHT_GRAY,
            selected_title_color: Color::DARK_GRAY,
            animation: AnimationSpec::indicator(),
        }
    }
}

impl SegmentStyle {
    pub fn with_cover_color(mut self, c: Color) -> Self {
        self.cover_background_color = c;
        self
    }
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.title_margin = margin;
        self
    }
    pub fn with_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.title_padding_horizontal = horizontal;
        self.title_padding_vertical = vertical;
        self
    }
    pub fn with_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }
    pub fn with_title_colors(mut self, normal: Color, selected: Color) -> Self {
        self.normal_title_color = normal;
        self.selected_title_color = selected;
        self
    }
    pub fn with_animation(mut self, spec: AnimationSpec) -> Self {
        self.animation = spec;
        self
    }

    /// Metrics must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let metric = |v: f32| v.is_finite() && v >= 0.0;
        if !metric(self.title_margin) {
            return Err(Error::InvalidStyle("title_margin"));
        }
        if !metric(self.title_padding_horizontal) {
            return Err(Error::InvalidStyle("title_padding_horizontal"));
        }
        if !metric(self.title_padding_vertical) {
            return Err(Error::InvalidStyle("title_padding_vertical"));
        }
        if !self.title_font.is_valid() {
            return Err(Error::InvalidStyle("title_font"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_look() {
        let s = SegmentStyle::default();
        assert_eq!(s.cover_background_color, Color(242, 242, 242, 255));
        assert_eq!(s.title_margin, 15.0);
        assert_eq!(s.title_padding_horizontal, 14.0);
        assert_eq!(s.title_padding_vertical, 14.0);
        assert_eq!(s.title_font, Font::bold(14.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_metrics() {
        let s = SegmentStyle::default().with_margin(f32::NAN);
        assert_eq!(s.validate(), Err(Error::InvalidStyle("title_margin")));

        let s = SegmentStyle::default().with_padding(-1.0, 0.0);
        assert_eq!(
            s.validate(),
            Err(Error::InvalidStyle("title_padding_horizontal"))
        );

        let s = SegmentStyle::default().with_font(Font::regular(f32::INFINITY));
        assert_eq!(s.validate(), Err(Error::InvalidStyle("title_font")));

        let s = SegmentStyle::default().with_font(Font {
            line_height_scale: 0.0,
            ..Font::bold(14.0)
        });
        assert_eq!(s.validate(), Err(Error::InvalidStyle("title_font")));
    }
}
