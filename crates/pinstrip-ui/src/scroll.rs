//! # Horizontal scroll model
//!
//! `HorizontalScrollState` holds the viewport width, content width and
//! current offset of a single-axis (X) scroller. Every way of moving the
//! offset clamps it to `[0, max(0, content - viewport)]`:
//!
//! - `set_offset` jumps.
//! - `animate_to` tweens on the animation clock (programmatic scrolling).
//! - `scroll_immediate` consumes a user delta (drag or wheel) and returns the
//!   leftover that a parent scroller could use. It also records a per-event
//!   velocity that `tick` turns into a decaying fling once the user lets go.
//!
//! User input always cancels a running programmatic tween.

use pinstrip_core::{AnimatedValue, AnimationSpec};

const FLING_START: f32 = 0.25;
const FLING_STOP: f32 = 0.05;
const FRICTION: f32 = 0.9;

/// X-only state
pub struct HorizontalScrollState {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
    tween: Option<AnimatedValue<f32>>,
    // physics
    vel: f32,
    flinging: bool,
    dragging: bool,
}

impl Default for HorizontalScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            viewport_width: 0.0,
            content_width: 0.0,
            tween: None,
            vel: 0.0,
            flinging: false,
            dragging: false,
        }
    }

    pub fn set_viewport_width(&mut self, w: f32) {
        self.viewport_width = w.max(0.0);
        self.clamp();
    }
    pub fn set_content_width(&mut self, w: f32) {
        self.content_width = w.max(0.0);
        self.clamp();
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn get(&self) -> f32 {
        self.offset
    }

    /// Jump to `off` (clamped), stopping tweens and flings.
    pub fn set_offset(&mut self, off: f32) {
        self.stop();
        self.offset = off.clamp(0.0, self.max_offset());
    }

    /// Tween to `off` (clamped). A running tween is retargeted.
    pub fn animate_to(&mut self, off: f32, spec: AnimationSpec) {
        let target = off.clamp(0.0, self.max_offset());
        self.flinging = false;
        self.vel = 0.0;
        if self.tween.is_none() && target == self.offset {
            return;
        }
        let tween = self.tween.get_or_insert_with(|| AnimatedValue::new(self.offset, spec));
        tween.set_spec(spec);
        tween.set_target(target);
    }

    /// Where the offset is heading: the tween target, or the offset itself.
    pub fn target(&self) -> f32 {
        self.tween.as_ref().map(|t| *t.target()).unwrap_or(self.offset)
    }

    /// Consume dx (pixels), clamp to bounds, return leftover.
    pub fn scroll_immediate(&mut self, dx: f32) -> f32 {
        self.tween = None;
        let before = self.offset;
        let new_off = (before + dx).clamp(0.0, self.max_offset());
        self.offset = new_off;

        let consumed = new_off - before;
        self.vel = consumed; // px/frame baseline
        self.flinging = consumed.abs() > FLING_START;
        dx - consumed
    }

    /// While a drag is held, velocity is recorded but no fling runs.
    pub fn begin_drag(&mut self) {
        self.tween = None;
        self.dragging = true;
        self.flinging = false;
        self.vel = 0.0;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.flinging = self.vel.abs() > FLING_START;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || (self.flinging && !self.dragging)
    }

    /// Advance the tween or the fling one frame; returns true if animating.
    pub fn tick(&mut self) -> bool {
        let max_off = self.max_offset();
        if let Some(tween) = self.tween.as_mut() {
            let running = tween.update();
            self.offset = tween.get().clamp(0.0, max_off);
            if !running {
                self.tween = None;
            }
            return running;
        }

        if !self.flinging || self.dragging {
            return false;
        }
        if self.vel.abs() < FLING_STOP {
            self.stop();
            return false;
        }

        let before = self.offset;
        let new_off = (before + self.vel).clamp(0.0, max_off);
        self.offset = new_off;
        if new_off == before {
            // hit an edge
            self.stop();
            return false;
        }
        self.vel *= FRICTION;
        true
    }

    fn stop(&mut self) {
        self.tween = None;
        self.vel = 0.0;
        self.flinging = false;
    }

    fn clamp(&mut self) {
        let max_off = self.max_offset();
        self.offset = self.offset.clamp(0.0, max_off);
        if let Some(t) = self.tween.as_mut() {
            let target = t.target().clamp(0.0, max_off);
            if target != *t.target() {
                t.set_target(target);
            }
        }
    }
}
