//! # Pinstrip core
//!
//! The pieces a control needs that have nothing to do with any particular
//! control:
//!
//! - geometry (`Rect`, `Vec2`, `Size`, `Transform`) and `Color`;
//! - a flat display list, `Scene`, with push/pop clips and transforms;
//! - tweened values (`AnimatedValue`) sampled from a per-thread clock;
//! - pointer input and target/action style control events;
//! - the `MeasureText` seam used by layout.
//!
//! ## Animation clock
//!
//! Animations read time from the current thread's clock. Platforms leave the
//! system clock in place; tests install a [`TestClock`] and step it:
//!
//! ```rust
//! use pinstrip_core::*;
//! use web_time::Duration;
//!
//! let clock = TestClock::install();
//! let mut x = AnimatedValue::new(0.0f32, AnimationSpec::tween(
//!     Duration::from_millis(100),
//!     Easing::Linear,
//! ));
//! x.set_target(10.0);
//! clock.advance(Duration::from_millis(50));
//! x.update();
//! assert!((*x.get() - 5.0).abs() < 1e-3);
//! ```

pub mod animation;
pub mod color;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod text;

pub use animation::*;
pub use color::*;
pub use error::{Error, Result};
pub use events::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use text::*;
