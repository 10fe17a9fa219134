use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

/// Pointer event; `position` is in the receiving control's local space.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    fn touch(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position: Vec2 { x, y },
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Down(PointerButton::Primary), x, y)
    }
    pub fn up(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Up(PointerButton::Primary), x, y)
    }
    pub fn moved(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Move, x, y)
    }
    pub fn cancel() -> Self {
        Self::touch(PointerEventKind::Cancel, 0.0, 0.0)
    }
}
