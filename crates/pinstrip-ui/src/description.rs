//! Building a control from a serialized UI description.
//!
//! ```json
//! {
//!   "frame": { "x": 0, "y": 0, "w": 375, "h": 44 },
//!   "titles": ["Home", "Following"],
//!   "style": { "title_margin": 20 }
//! }
//! ```
//!
//! `frame` and `titles` have no sensible default, so a description without
//! them is rejected. A missing style, or missing style fields, use the
//! defaults.

use pinstrip_core::{Error, MeasureText, Rect, Result};
use pinstrip_text::CosmicMeasurer;
use serde::{Deserialize, Serialize};

use crate::{SegmentControl, SegmentStyle};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentDescription {
    #[serde(default)]
    pub frame: Option<Rect>,
    #[serde(default)]
    pub style: Option<SegmentStyle>,
    #[serde(default)]
    pub titles: Option<Vec<String>>,
}

impl SegmentDescription {
    pub fn new(frame: Rect, style: SegmentStyle, titles: Vec<String>) -> Self {
        Self {
            frame: Some(frame),
            style: Some(style),
            titles: Some(titles),
        }
    }
}

impl From<&SegmentControl> for SegmentDescription {
    fn from(control: &SegmentControl) -> Self {
        Self::new(
            control.frame(),
            control.style().clone(),
            control.titles().to_vec(),
        )
    }
}

impl SegmentControl {
    pub fn from_description(desc: SegmentDescription) -> Result<Self> {
        Self::from_description_with_measurer(desc, CosmicMeasurer)
    }

    pub fn from_description_with_measurer(
        desc: SegmentDescription,
        measurer: impl MeasureText + 'static,
    ) -> Result<Self> {
        let frame = desc.frame.ok_or(Error::MissingInitData("frame"))?;
        let titles = desc.titles.ok_or(Error::MissingInitData("titles"))?;
        let style = desc.style.unwrap_or_default();
        Self::with_measurer(frame, style, titles, measurer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinstrip_core::{Color, MonospaceMeasurer};

    fn build(json: &str) -> Result<SegmentControl> {
        let desc: SegmentDescription = serde_json::from_str(json).unwrap();
        SegmentControl::from_description_with_measurer(desc, MonospaceMeasurer::default())
    }

    #[test]
    fn partial_style_falls_back_to_defaults() {
        let c = build(
            r#"{
                "frame": { "x": 0, "y": 0, "w": 200, "h": 44 },
                "titles": ["Home", "Following"],
                "style": { "title_margin": 20, "selected_title_color": [255, 0, 0, 255] }
            }"#,
        )
        .unwrap();
        assert_eq!(c.style().title_margin, 20.0);
        assert_eq!(c.style().selected_title_color, Color(255, 0, 0, 255));
        assert_eq!(c.style().title_padding_horizontal, 14.0);
        assert_eq!(c.segments()[1].rect.x, c.segments()[0].rect.max_x() + 20.0);
    }

    #[test]
    fn missing_style_uses_the_default() {
        let c = build(r#"{ "frame": { "x": 0, "y": 0, "w": 200, "h": 44 }, "titles": [] }"#)
            .unwrap();
        assert_eq!(c.style(), &SegmentStyle::default());
        assert!(c.segments().is_empty());
    }

    #[test]
    fn missing_init_data_is_an_error() {
        let err = build(r#"{ "titles": ["A"] }"#).err();
        assert_eq!(err, Some(Error::MissingInitData("frame")));

        let err = build(r#"{ "frame": { "x": 0, "y": 0, "w": 10, "h": 10 } }"#).err();
        assert_eq!(err, Some(Error::MissingInitData("titles")));
    }

    #[test]
    fn collapsed_font_is_rejected() {
        let desc: SegmentDescription = serde_json::from_str(
            r#"{
                "frame": { "x": 0, "y": 0, "w": 200, "h": 44 },
                "titles": ["A", "Bee"],
                "style": {
                    "title_font": { "size": 14, "weight": "Bold", "line_height_scale": 0 }
                }
            }"#,
        )
        .unwrap();
        let err = SegmentControl::from_description(desc).err();
        assert_eq!(err, Some(Error::InvalidStyle("title_font")));
    }

    #[test]
    fn description_of_a_control_rebuilds_it() {
        let c = build(
            r#"{ "frame": { "x": 5, "y": 0, "w": 120, "h": 44 }, "titles": ["A", "Bee"] }"#,
        )
        .unwrap();
        let json = serde_json::to_string(&SegmentDescription::from(&c)).unwrap();
        let again = build(&json).unwrap();
        assert_eq!(again.frame(), c.frame());
        assert_eq!(again.segments(), c.segments());
    }
}
