//! # Segment control
//!
//! A horizontally scrollable row of titles with a pill-shaped cover behind
//! the selected one.
//!
//! ```rust
//! use pinstrip_core::*;
//! use pinstrip_ui::*;
//!
//! let mut tabs = SegmentControl::with_measurer(
//!     Rect::new(0.0, 0.0, 320.0, 44.0),
//!     SegmentStyle::default(),
//!     ["Home", "Following", "Trending"],
//!     MonospaceMeasurer::default(),
//! )?;
//! tabs.set_on_value_change(|i| log::info!("selected {i}"));
//!
//! tabs.set_selected_index(2, false);
//! assert_eq!(tabs.selected_index(), 2);
//! assert_eq!(tabs.indicator_rect(), tabs.segments()[2].rect);
//! # Ok::<(), pinstrip_core::Error>(())
//! ```
//!
//! The control is retained: it keeps its own layout, scroll and animation
//! state. A host feeds it pointer events in control-local coordinates, calls
//! `tick` once per frame while `is_animating` and draws whatever `paint`
//! returns.
//!
//! Requests that cannot change anything (out-of-range index, the index that
//! is already selected, identical titles) are ignored without an error.

use std::rc::Rc;

use pinstrip_core::{
    AnimatedValue, Color, ControlEvent, ControlEvents, Error, EventTargets, MeasureText,
    PointerEvent, PointerEventKind, Rect, Result, Scene, Size, TargetId, Vec2,
};
use pinstrip_text::CosmicMeasurer;

use crate::gestures::{Gesture, TapDetector};
use crate::paint::SegmentPaint;
use crate::scroll::HorizontalScrollState;
use crate::{Segment, SegmentLayout, SegmentStyle};

pub type IndexCallback = Rc<dyn Fn(usize)>;

pub struct SegmentControl {
    frame: Rect,
    style: SegmentStyle,
    titles: Vec<String>,
    measurer: Box<dyn MeasureText>,
    layout: SegmentLayout,
    selected: usize,
    indicator: AnimatedValue<Rect>,
    scroll: HorizontalScrollState,
    taps: TapDetector,
    on_value_change: Option<IndexCallback>,
    targets: EventTargets,
}

impl SegmentControl {
    /// Measures titles with the shared cosmic-text font system.
    pub fn new<S: Into<String>>(
        frame: Rect,
        style: SegmentStyle,
        titles: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Self::with_measurer(frame, style, titles, CosmicMeasurer)
    }

    pub fn with_titles<S: Into<String>>(
        frame: Rect,
        titles: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Self::new(frame, SegmentStyle::default(), titles)
    }

    /// Non-finite geometry or style metrics are rejected. Zero or negative
    /// sizes are accepted and simply lay out into nothing visible.
    pub fn with_measurer<S: Into<String>>(
        frame: Rect,
        style: SegmentStyle,
        titles: impl IntoIterator<Item = S>,
        measurer: impl MeasureText + 'static,
    ) -> Result<Self> {
        if !frame.is_finite() {
            return Err(Error::InvalidGeometry(frame));
        }
        style.validate()?;

        let mut control = Self {
            frame,
            indicator: AnimatedValue::new(Rect::ZERO, style.animation),
            style,
            titles: titles.into_iter().map(Into::into).collect(),
            measurer: Box::new(measurer),
            layout: SegmentLayout::default(),
            selected: 0,
            scroll: HorizontalScrollState::new(),
            taps: TapDetector::new(),
            on_value_change: None,
            targets: EventTargets::new(),
        };
        control.reload();
        Ok(control)
    }

    // Full teardown and rebuild; no diffing against the previous layout.
    fn reload(&mut self) {
        let viewport = self.frame.size();
        self.layout =
            SegmentLayout::compute(&self.titles, &self.style, self.measurer.as_ref(), viewport);
        self.scroll.set_viewport_width(viewport.width);
        self.scroll.set_content_width(self.layout.content_size.width);

        let rest = self
            .layout
            .get(self.selected)
            .or_else(|| self.layout.get(0))
            .map(|s| s.rect)
            .unwrap_or(Rect::ZERO);
        self.indicator.set_spec(self.style.animation);
        self.indicator.snap_to(rest);
        // the new detector never sees this press, so no DragEnd would arrive
        if self.taps.is_dragging() {
            self.scroll.end_drag();
        }
        self.taps = TapDetector::new();

        log::debug!(
            "segment reload: {} segments, content {:.1}x{:.1}",
            self.layout.len(),
            self.layout.content_size.width,
            self.layout.content_size.height
        );
    }

    /// Replaces the titles. Identical titles are ignored; anything else
    /// relays out and goes back to the first segment.
    pub fn set_titles<S: Into<String>>(&mut self, titles: impl IntoIterator<Item = S>) {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles == self.titles {
            log::trace!("set_titles: unchanged");
            return;
        }
        self.titles = titles;
        self.reload();

        let Some(first) = self.layout.get(0).map(|s| s.rect) else {
            self.selected = 0;
            self.scroll.set_offset(0.0);
            return;
        };
        self.indicator.snap_to(first);
        if self.selected == 0 {
            if let Some(off) = self.layout.centered_offset(0, self.frame.w) {
                self.scroll.animate_to(off, self.style.animation);
            }
        } else {
            self.set_selected_index(0, true);
        }
    }

    /// Relays out with `style`, keeping the selection. A style with
    /// non-finite or negative metrics is ignored.
    pub fn set_style(&mut self, style: SegmentStyle) {
        if let Err(e) = style.validate() {
            log::warn!("set_style ignored: {e}");
            return;
        }
        self.style = style;
        self.reload();
    }

    /// Moves/resizes the control. Vertical centering and the viewport width
    /// depend on it, so this relays out.
    pub fn set_frame(&mut self, frame: Rect) {
        if !frame.is_finite() {
            log::warn!("set_frame ignored: {frame:?}");
            return;
        }
        if frame == self.frame {
            return;
        }
        self.frame = frame;
        self.reload();
    }

    /// Selects `index`, scrolling it toward the middle of the viewport and
    /// moving the cover onto it. Ignored if `index` is already selected or
    /// out of range.
    pub fn set_selected_index(&mut self, index: usize, animated: bool) {
        if index == self.selected {
            log::trace!("set_selected_index({index}): already selected");
            return;
        }
        let Some(target) = self.layout.get(index).map(|s| s.rect) else {
            log::trace!(
                "set_selected_index({index}): out of range (count {})",
                self.layout.len()
            );
            return;
        };

        let offset = self
            .layout
            .centered_offset(index, self.frame.w)
            .unwrap_or(0.0);
        if animated {
            self.scroll.animate_to(offset, self.style.animation);
            self.indicator.set_target(target);
        } else {
            self.scroll.set_offset(offset);
            self.indicator.snap_to(target);
        }

        log::debug!("segment {} -> {index} (animated: {animated})", self.selected);
        self.selected = index;

        if let Some(cb) = self.on_value_change.clone() {
            cb(index);
        }
        self.targets.send(&ControlEvent {
            kind: ControlEvents::VALUE_CHANGED,
            value: index,
        });
    }

    /// Tap at a control-local point. The segment under `point.x` (in content
    /// space) is selected with animation; returns it.
    pub fn tap(&mut self, point: Vec2) -> Option<usize> {
        let hit = self.segment_at(point.x);
        match hit {
            Some(i) => self.set_selected_index(i, true),
            None => log::trace!("tap at {:.1} hit nothing", point.x),
        }
        hit
    }

    /// Hit test for a control-local x; vertical position does not matter.
    pub fn segment_at(&self, local_x: f32) -> Option<usize> {
        self.layout.hit_test(local_x + self.scroll.get())
    }

    /// Feeds a pointer event in control-local coordinates. Returns whether
    /// the control is handling the pointer.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if let PointerEventKind::Down(_) = event.event {
            let bounds = Rect::from_size(self.frame.size());
            if !bounds.contains(event.position) {
                return false;
            }
        }
        match self.taps.handle_pointer(event) {
            Some(Gesture::Tap(p)) => {
                self.tap(p);
                true
            }
            Some(Gesture::DragStart) => {
                self.scroll.begin_drag();
                true
            }
            Some(Gesture::Drag { dx }) => {
                // content moves with the finger
                self.scroll.scroll_immediate(-dx);
                true
            }
            Some(Gesture::DragEnd) => {
                self.scroll.end_drag();
                true
            }
            None => self.taps.is_tracking(),
        }
    }

    /// Wheel/trackpad scroll by `dx`; returns what could not be consumed.
    pub fn handle_scroll(&mut self, dx: f32) -> f32 {
        self.scroll.scroll_immediate(dx)
    }

    /// Advances the cover slide, programmatic scroll and fling. Returns true
    /// while another frame is needed.
    pub fn tick(&mut self) -> bool {
        let indicator = self.indicator.update();
        let scroll = self.scroll.tick();
        indicator || scroll
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.is_animating() || self.scroll.is_animating()
    }

    pub fn paint(&self) -> Scene {
        let mut scene = Scene::new(Color::TRANSPARENT);
        self.paint_into(&mut scene);
        scene
    }

    pub fn paint_into(&self, scene: &mut Scene) {
        SegmentPaint {
            frame: self.frame,
            layout: &self.layout,
            style: &self.style,
            indicator: *self.indicator.get(),
            scroll_offset: self.scroll.get(),
        }
        .paint(scene);
    }

    pub fn set_on_value_change(&mut self, f: impl Fn(usize) + 'static) {
        self.on_value_change = Some(Rc::new(f));
    }

    pub fn clear_on_value_change(&mut self) {
        self.on_value_change = None;
    }

    pub fn add_target(
        &mut self,
        events: ControlEvents,
        handler: impl Fn(&ControlEvent) + 'static,
    ) -> TargetId {
        self.targets.add(events, handler)
    }

    pub fn remove_target(&mut self, id: TargetId) -> bool {
        self.targets.remove(id)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.layout.get(self.selected)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn segments(&self) -> &[Segment] {
        &self.layout.segments
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    /// Current cover rect in content space, mid-slide if animating.
    pub fn indicator_rect(&self) -> Rect {
        *self.indicator.get()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.get()
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.scroll.max_offset()
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size
    }
}
