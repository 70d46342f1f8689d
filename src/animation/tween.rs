use crate::{
    animation::ease::Ease,
    foundation::core::{Fps, Point, Rect},
    foundation::error::{RaceError, RaceResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (t = 0) and `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            f64::lerp(&a.x0, &b.x0, t),
            f64::lerp(&a.y0, &b.y0, t),
            f64::lerp(&a.x1, &b.x1, t),
            f64::lerp(&a.y1, &b.y1, t),
        )
    }
}

/// Anything that can be resolved at a transition progress in `[0, 1]`.
///
/// Progress is already eased; callers own the clock (see [`Timing`]).
pub trait Tween {
    /// Resolved value type.
    type Output;

    /// Resolve at `progress` (0 = start of the transition, 1 = end).
    fn at(&self, progress: f64) -> Self::Output;
}

/// Start and end value of one animated property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition<T> {
    /// Value at progress 0.
    pub from: T,
    /// Value at progress 1.
    pub to: T,
}

impl<T> Transition<T> {
    /// Build a transition.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

impl<T: Clone> Transition<T> {
    /// A transition that holds `value` for the whole duration.
    pub fn hold(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
        }
    }
}

impl<T: PartialEq> Transition<T> {
    /// True when start and end are equal.
    pub fn is_static(&self) -> bool {
        self.from == self.to
    }
}

impl<T: Lerp> Tween for Transition<T> {
    type Output = T;

    fn at(&self, progress: f64) -> T {
        T::lerp(&self.from, &self.to, progress.clamp(0.0, 1.0))
    }
}

/// Wall-clock shape of one frame-to-frame transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Transition length in seconds.
    pub duration_secs: f64,
    /// Easing applied to linear progress.
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            ease: Ease::EaseInOut,
        }
    }
}

impl Timing {
    /// Check duration and ease parameters.
    pub fn validate(&self) -> RaceResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(RaceError::validation(
                "transition duration must be finite and >= 0",
            ));
        }
        self.ease.validate()
    }

    /// Eased progress after `elapsed_secs`; a zero duration jumps straight to the end.
    pub fn progress_at(&self, elapsed_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        self.ease.apply(elapsed_secs / self.duration_secs)
    }

    /// Eased progress after `frames` ticks of a frame clock.
    pub fn progress_at_frame(&self, frames: u64, fps: Fps) -> f64 {
        self.progress_at(fps.frames_to_secs(frames))
    }

    /// Number of whole frames the transition spans at `fps`.
    pub fn frame_count(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_floor(self.duration_secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
