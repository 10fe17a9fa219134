#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }
    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }
    pub fn mid_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
    pub fn mid_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.mid_x(),
            y: self.mid_y(),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// Inclusive horizontal span test; vertical extent is ignored.
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Overlap of two rects; `None` when they do not touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.max_x().min(other.max_x());
        let y1 = (self.y + self.h).min(other.y + other.h);
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn apply_to_point(&self, p: Vec2) -> Vec2 {
        // scale, then translate
        Vec2 {
            x: p.x * self.scale_x + self.translate_x,
            y: p.y * self.scale_y + self.translate_y,
        }
    }

    pub fn apply_to_rect(&self, r: Rect) -> Rect {
        let p = self.apply_to_point(Vec2 { x: r.x, y: r.y });
        Rect {
            x: p.x,
            y: p.y,
            w: r.w * self.scale_x,
            h: r.h * self.scale_y,
        }
    }

    /// `self` applied after `inner`.
    pub fn combine(&self, inner: &Transform) -> Transform {
        Transform {
            translate_x: self.translate_x + inner.translate_x * self.scale_x,
            translate_y: self.translate_y + inner.translate_y * self.scale_y,
            scale_x: self.scale_x * inner.scale_x,
            scale_y: self.scale_y * inner.scale_y,
        }
    }
}
