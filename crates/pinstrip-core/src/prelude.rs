pub use crate::animation::{AnimatedValue, AnimationSpec, Easing, TestClock, set_clock};
pub use crate::color::Color;
pub use crate::error::{Error, Result};
pub use crate::events::{ControlEvent, ControlEvents, EventTargets, TargetId};
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::input::{PointerEvent, PointerEventKind};
pub use crate::scene::{Scene, SceneNode};
pub use crate::text::{Font, FontWeight, MeasureText, MonospaceMeasurer};
