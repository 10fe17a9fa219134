use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_time::{Duration, Instant};

use crate::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }
    /// The short slide used by the segment indicator.
    pub fn indicator() -> Self {
        Self::tween(Duration::from_millis(200), Easing::EaseInOut)
    }
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

// Animation clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

thread_local! {
    static CLOCK: RefCell<Option<Rc<dyn Clock>>> = const { RefCell::new(None) };
}

/// Current time on this thread's animation clock.
pub fn now() -> Instant {
    CLOCK
        .with(|c| c.borrow().as_ref().map(|c| c.now()))
        .unwrap_or_else(Instant::now)
}

/// Install the animation clock for the current (UI) thread, replacing any
/// previous one.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = Some(clock));
}

/// Fall back to the system clock.
pub fn reset_clock() {
    CLOCK.with(|c| *c.borrow_mut() = None);
}

/// A clock driven by hand. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }
    /// Creates a clock and installs it on the current thread.
    pub fn install() -> Self {
        let clock = Self::new();
        set_clock(Rc::new(clock.clone()));
        clock
    }
    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    /// Retargets from the value sampled now. A running transition is not
    /// queued; the newest target wins.
    pub fn set_target(&mut self, target: T) {
        self.update();
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now());
    }

    /// Jump to `value` and stop any transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now().saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true;
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
