//! # Pinstrip UI
//!
//! A horizontally scrollable segmented tab bar. Titles are laid out left to
//! right, a pill-shaped cover slides behind the selected one, and the
//! selected text color only shows inside that pill.
//!
//! - [`SegmentStyle`]: flat style snapshot with builder methods.
//! - [`SegmentLayout`]: pure layout of titles into segment rects.
//! - [`HorizontalScrollState`]: clamped X scrolling with tweens and flings.
//! - [`TapDetector`]: turns raw pointer events into taps and drags.
//! - [`SegmentControl`]: the control itself, which ties them together and
//!   paints into a [`Scene`](pinstrip_core::Scene).
//!
//! With the `serde` feature a control can also be built from a
//! [`SegmentDescription`].

pub mod gestures;
pub mod layout;
mod paint;
pub mod scroll;
pub mod segment;
pub mod style;

#[cfg(feature = "serde")]
pub mod description;

#[cfg(feature = "serde")]
pub use description::SegmentDescription;
pub use gestures::{Gesture, TapDetector};
pub use layout::{Segment, SegmentLayout};
pub use scroll::HorizontalScrollState;
pub use segment::{IndexCallback, SegmentControl};
pub use style::SegmentStyle;
