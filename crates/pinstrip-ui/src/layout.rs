//! Left-to-right segment layout.
//!
//! Every segment is as wide as its measured title plus horizontal padding on
//! both sides. The first starts at x = 0 and each following one starts one
//! margin after the previous right edge. All segments share the viewport's
//! vertical center:
//!
//! ```text
//!  0        w0   w0+m        w0+m+w1
//!  |  title0 |    |   title1   |   ...
//!  ^ rect (cover height, pill) and label_rect (line height) share a center
//! ```

use pinstrip_core::{MeasureText, Rect, Size};
use smallvec::SmallVec;

use crate::SegmentStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub title: String,
    /// Cover-sized rectangle; the indicator rests exactly on it.
    pub rect: Rect,
    /// Where both label layers draw the title.
    pub label_rect: Rect,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentLayout {
    pub segments: SmallVec<[Segment; 8]>,
    pub content_size: Size,
    pub line_height: f32,
    pub cover_height: f32,
    /// Pill radius for the indicator and its mask.
    pub corner_radius: f32,
}

impl SegmentLayout {
    pub fn compute(
        titles: &[String],
        style: &SegmentStyle,
        measurer: &dyn MeasureText,
        viewport: Size,
    ) -> Self {
        let font = &style.title_font;
        let line_height = measurer.line_height(font);
        let cover_height = line_height + style.title_padding_vertical;
        let label_y = (viewport.height - line_height) / 2.0;
        let cover_y = (viewport.height - cover_height) / 2.0;

        let mut segments: SmallVec<[Segment; 8]> = SmallVec::with_capacity(titles.len());
        for (index, title) in titles.iter().enumerate() {
            let w = measurer.line_width(title, font) + style.title_padding_horizontal * 2.0;
            let x = segments
                .last()
                .map(|s| s.rect.max_x() + style.title_margin)
                .unwrap_or(0.0);
            segments.push(Segment {
                index,
                title: title.clone(),
                rect: Rect::new(x, cover_y, w, cover_height),
                label_rect: Rect::new(x, label_y, w, line_height),
            });
        }

        let content_width = segments.last().map(|s| s.rect.max_x()).unwrap_or(0.0);
        Self {
            segments,
            content_size: Size {
                width: content_width,
                height: viewport.height,
            },
            line_height,
            cover_height,
            corner_radius: cover_height / 2.0,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// First segment whose horizontal span contains `content_x` (inclusive).
    pub fn hit_test(&self, content_x: f32) -> Option<usize> {
        self.segments
            .iter()
            .find(|s| s.rect.spans_x(content_x))
            .map(|s| s.index)
    }

    /// Scroll offset that centers segment `index` in a viewport of
    /// `viewport_width`, clamped to `[0, max(0, content - viewport)]`.
    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> Option<f32> {
        let seg = self.get(index)?;
        let viewport_width = viewport_width.max(0.0);
        let max_offset = (self.content_size.width - viewport_width).max(0.0);
        Some((seg.rect.mid_x() - viewport_width / 2.0).clamp(0.0, max_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinstrip_core::MonospaceMeasurer;

    fn titles(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|t| t.to_string()).collect()
    }

    // 14px bold, advance 7px per cluster, line height 16.8
    fn layout(ts: &[&str], viewport: Size) -> SegmentLayout {
        SegmentLayout::compute(
            &titles(ts),
            &SegmentStyle::default(),
            &MonospaceMeasurer::default(),
            viewport,
        )
    }

    const VIEWPORT: Size = Size {
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn lays_out_left_to_right_with_margin() {
        let l = layout(&["A", "Bee", "Ccc"], VIEWPORT);
        assert_eq!(l.len(), 3);

        let widths: Vec<f32> = l.segments.iter().map(|s| s.rect.w).collect();
        assert_eq!(widths, vec![7.0 + 28.0, 21.0 + 28.0, 21.0 + 28.0]);

        assert_eq!(l.segments[0].rect.x, 0.0);
        for pair in l.segments.windows(2) {
            assert!(pair[1].rect.x > pair[0].rect.x);
            assert_eq!(pair[0].rect.max_x() + 15.0, pair[1].rect.x);
        }
        assert_eq!(l.content_size.width, l.segments[2].rect.max_x());
        assert_eq!(l.content_size.height, 50.0);
    }

    #[test]
    fn rects_share_the_vertical_center() {
        let l = layout(&["A", "Bee"], VIEWPORT);
        let line_height = 14.0 * 1.2;
        assert!((l.line_height - line_height).abs() < 1e-4);
        assert!((l.cover_height - (line_height + 14.0)).abs() < 1e-4);
        assert!((l.corner_radius - l.cover_height / 2.0).abs() < 1e-6);

        for s in &l.segments {
            assert!((s.rect.mid_y() - 25.0).abs() < 1e-4);
            assert!((s.label_rect.mid_y() - 25.0).abs() < 1e-4);
            assert_eq!(s.rect.x, s.label_rect.x);
            assert_eq!(s.rect.w, s.label_rect.w);
        }
    }

    #[test]
    fn empty_titles_produce_no_content() {
        let l = layout(&[], VIEWPORT);
        assert!(l.is_empty());
        assert_eq!(l.content_size.width, 0.0);
        assert_eq!(l.hit_test(0.0), None);
        assert_eq!(l.centered_offset(0, 100.0), None);
    }

    #[test]
    fn duplicates_are_separate_segments() {
        let l = layout(&["x", "x"], VIEWPORT);
        assert_eq!(l.len(), 2);
        assert_ne!(l.segments[0].rect, l.segments[1].rect);
    }

    #[test]
    fn layout_is_idempotent() {
        let a = layout(&["One", "Two", "Three"], VIEWPORT);
        let b = layout(&["One", "Two", "Three"], VIEWPORT);
        assert_eq!(a, b);
    }

    #[test]
    fn hit_test_uses_horizontal_span_only() {
        let l = layout(&["A", "Bee"], VIEWPORT);
        let s1 = &l.segments[1];
        assert_eq!(l.hit_test(s1.rect.mid_x()), Some(1));
        assert_eq!(l.hit_test(s1.rect.min_x()), Some(1));
        assert_eq!(l.hit_test(s1.rect.max_x()), Some(1));
        // in the margin between segments
        assert_eq!(l.hit_test(l.segments[0].rect.max_x() + 1.0), None);
        assert_eq!(l.hit_test(-1.0), None);
    }

    #[test]
    fn zero_margin_prefers_the_first_match() {
        let l = SegmentLayout::compute(
            &titles(&["A", "B"]),
            &SegmentStyle::default().with_margin(0.0),
            &MonospaceMeasurer::default(),
            VIEWPORT,
        );
        let edge = l.segments[0].rect.max_x();
        assert_eq!(edge, l.segments[1].rect.x);
        assert_eq!(l.hit_test(edge), Some(0));
    }

    #[test]
    fn centered_offset_is_clamped() {
        let many: Vec<&str> = vec!["Segment"; 12];
        let l = layout(&many, VIEWPORT);
        let max_offset = l.content_size.width - VIEWPORT.width;
        assert!(max_offset > 0.0);

        for i in 0..l.len() {
            let off = l.centered_offset(i, VIEWPORT.width).unwrap_or(-1.0);
            assert!((0.0..=max_offset).contains(&off), "segment {i}: {off}");
        }
        assert_eq!(l.centered_offset(0, VIEWPORT.width), Some(0.0));
        assert_eq!(l.centered_offset(l.len() - 1, VIEWPORT.width), Some(max_offset));

        let mid = 6;
        let expected = l.segments[mid].rect.mid_x() - VIEWPORT.width / 2.0;
        assert_eq!(l.centered_offset(mid, VIEWPORT.width), Some(expected));
    }

    #[test]
    fn short_content_never_scrolls() {
        let l = layout(&["A"], VIEWPORT);
        assert_eq!(l.centered_offset(0, VIEWPORT.width), Some(0.0));
        // a degenerate viewport still stays inside the content
        let off = l.centered_offset(0, -10.0).unwrap();
        assert!((0.0..=l.content_size.width).contains(&off));
    }
}
