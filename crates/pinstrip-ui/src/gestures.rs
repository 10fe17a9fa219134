use pinstrip_core::animation::now;
use pinstrip_core::{PointerButton, PointerEvent, PointerEventKind, PointerId, Vec2};
use web_time::{Duration, Instant};

/// Movement beyond this turns a press into a drag.
pub const TAP_SLOP: f32 = 10.0;
/// A press held longer than this is not a tap.
pub const TAP_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Released within the slop; position at release.
    Tap(Vec2),
    DragStart,
    /// Horizontal movement since the previous drag event.
    Drag { dx: f32 },
    DragEnd,
}

/// Splits a single primary pointer into taps and horizontal drags.
#[derive(Default)]
pub struct TapDetector {
    press: Option<Press>,
}

struct Press {
    id: PointerId,
    start: Vec2,
    at: Instant,
    last_x: f32,
    dragging: bool,
}

impl TapDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// A press is held and has moved past the slop.
    pub fn is_dragging(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.dragging)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Gesture> {
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                if self.press.is_some() {
                    // second finger; keep the first
                    return None;
                }
                self.press = Some(Press {
                    id: event.id,
                    start: event.position,
                    at: now(),
                    last_x: event.position.x,
                    dragging: false,
                });
                None
            }
            PointerEventKind::Move => {
                let press = self.press.as_mut().filter(|p| p.id == event.id)?;
                if press.dragging {
                    let dx = event.position.x - press.last_x;
                    press.last_x = event.position.x;
                    return Some(Gesture::Drag { dx });
                }
                let dx = event.position.x - press.start.x;
                let dy = event.position.y - press.start.y;
                if (dx * dx + dy * dy).sqrt() > TAP_SLOP {
                    press.dragging = true;
                    press.last_x = press.start.x;
                    return Some(Gesture::DragStart);
                }
                None
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                let press = self.press.take_if(|p| p.id == event.id)?;
                if press.dragging {
                    return Some(Gesture::DragEnd);
                }
                let held = now().saturating_duration_since(press.at);
                let dx = event.position.x - press.start.x;
                let dy = event.position.y - press.start.y;
                if held <= TAP_TIMEOUT && (dx * dx + dy * dy).sqrt() <= TAP_SLOP {
                    Some(Gesture::Tap(event.position))
                } else {
                    None
                }
            }
            PointerEventKind::Cancel => {
                let press = self.press.take()?;
                press.dragging.then_some(Gesture::DragEnd)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinstrip_core::{PointerKind, TestClock};

    #[test]
    fn down_up_in_place_is_a_tap() {
        let _clock = TestClock::install();
        let mut d = TapDetector::new();
        assert_eq!(d.handle_pointer(&PointerEvent::down(10.0, 5.0)), None);
        assert_eq!(
            d.handle_pointer(&PointerEvent::up(12.0, 6.0)),
            Some(Gesture::Tap(Vec2 { x: 12.0, y: 6.0 }))
        );
        assert!(!d.is_tracking());
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let clock = TestClock::install();
        let mut d = TapDetector::new();
        d.handle_pointer(&PointerEvent::down(10.0, 5.0));
        clock.advance(TAP_TIMEOUT + Duration::from_millis(1));
        assert_eq!(d.handle_pointer(&PointerEvent::up(10.0, 5.0)), None);
    }

    #[test]
    fn movement_past_slop_becomes_a_drag() {
        let _clock = TestClock::install();
        let mut d = TapDetector::new();
        d.handle_pointer(&PointerEvent::down(100.0, 5.0));
        assert_eq!(d.handle_pointer(&PointerEvent::moved(95.0, 5.0)), None);
        assert_eq!(
            d.handle_pointer(&PointerEvent::moved(80.0, 5.0)),
            Some(Gesture::DragStart)
        );
        assert!(d.is_dragging());
        assert_eq!(
            d.handle_pointer(&PointerEvent::moved(70.0, 9.0)),
            Some(Gesture::Drag { dx: -30.0 })
        );
        assert_eq!(
            d.handle_pointer(&PointerEvent::moved(75.0, 9.0)),
            Some(Gesture::Drag { dx: 5.0 })
        );
        assert_eq!(
            d.handle_pointer(&PointerEvent::up(75.0, 9.0)),
            Some(Gesture::DragEnd)
        );
        assert!(!d.is_dragging());
    }

    #[test]
    fn cancel_and_other_buttons() {
        let _clock = TestClock::install();
        let mut d = TapDetector::new();
        let right = PointerEvent {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            event: PointerEventKind::Down(PointerButton::Secondary),
            position: Vec2::default(),
        };
        assert_eq!(d.handle_pointer(&right), None);
        assert!(!d.is_tracking());

        d.handle_pointer(&PointerEvent::down(0.0, 0.0));
        assert_eq!(d.handle_pointer(&PointerEvent::cancel()), None);
        assert_eq!(d.handle_pointer(&PointerEvent::up(0.0, 0.0)), None);
    }
}
