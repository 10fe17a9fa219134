//! Scene output for the segment control.
//!
//! Two copies of every title are drawn at the same label rects. The
//! normal-colored copy is always visible; the selected-colored copy sits
//! above the cover inside a clip equal to the cover's current rect. While the
//! cover slides, the clip slides with it, so the selected color shows only
//! inside the pill on every frame.

use pinstrip_core::{Rect, Scene, SceneNode, Transform};

use crate::{SegmentLayout, SegmentStyle};

pub(crate) struct SegmentPaint<'a> {
    pub frame: Rect,
    pub layout: &'a SegmentLayout,
    pub style: &'a SegmentStyle,
    /// Current (possibly mid-animation) indicator rect, content space.
    pub indicator: Rect,
    pub scroll_offset: f32,
}

impl SegmentPaint<'_> {
    pub(crate) fn paint(&self, scene: &mut Scene) {
        let viewport = Rect::new(0.0, 0.0, self.frame.w.max(0.0), self.frame.h.max(0.0));

        scene.push(SceneNode::PushTransform {
            transform: Transform::translate(self.frame.x, self.frame.y),
        });
        scene.push(SceneNode::PushClip {
            rect: viewport,
            radius: 0.0,
        });
        scene.push(SceneNode::PushTransform {
            transform: Transform::translate(-self.scroll_offset, 0.0),
        });

        if !self.layout.is_empty() {
            self.labels(scene, self.style.normal_title_color);

            let radius = self.layout.corner_radius;
            scene.push(SceneNode::Rect {
                rect: self.indicator,
                color: self.style.cover_background_color,
                radius,
            });
            scene.push(SceneNode::PushClip {
                rect: self.indicator,
                radius,
            });
            self.labels(scene, self.style.selected_title_color);
            scene.push(SceneNode::PopClip);
        }

        scene.push(SceneNode::PopTransform);
        scene.push(SceneNode::PopClip);
        scene.push(SceneNode::PopTransform);
    }

    fn labels(&self, scene: &mut Scene, color: pinstrip_core::Color) {
        for seg in &self.layout.segments {
            scene.push(SceneNode::Text {
                rect: seg.label_rect,
                text: seg.title.clone(),
                color,
                font: self.style.title_font,
            });
        }
    }
}
