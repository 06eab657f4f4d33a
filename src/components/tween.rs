//! Linear keyframe interpolation shared by the patrol controller and the
//! pulsing outline effect.
//!
//! - [`LinearCycle`] – elapsed-time counter blending between two values
//! - [`LoopMode`] – what happens when a cycle reaches its end
//! - [`Keyframe`] – persisted form of a scalar or 3D keyframe
//!
//! Progress is clamped to `[0, 1]`, so the tick that reaches the duration
//! writes the end value exactly and completes the cycle in the same tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Determines how a cycle behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    /// Run once, then wait until re-armed.
    OneShot,
    /// Swap start and end, and run again.
    PingPong,
}

/// A keyframe value as stored in scene documents.
///
/// Serialized untagged: a plain number for scalars, `[x, y, z]` for vectors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keyframe {
    Scalar(f32),
    Vector(Vec3),
}

/// Values that can be linearly blended.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }
}

/// Result of advancing a [`LinearCycle`] by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CycleStep<T> {
    /// Still inside the cycle; carries the interpolated value.
    Running(T),
    /// The cycle reached its end this tick; carries the end value.
    Completed(T),
}

impl<T: Copy> CycleStep<T> {
    pub fn value(&self) -> T {
        match self {
            CycleStep::Running(v) | CycleStep::Completed(v) => *v,
        }
    }
    pub fn is_completed(&self) -> bool {
        matches!(self, CycleStep::Completed(_))
    }
}

/// Linear blend between `start` and `end` over `duration` seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearCycle<T> {
    pub start: T,
    pub end: T,
    pub duration: f32,
    pub elapsed: f32,
}

impl<T: Lerp> LinearCycle<T> {
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
        }
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at the current elapsed time.
    pub fn value(&self) -> T {
        T::lerp(self.start, self.end, self.progress())
    }

    /// Advance by `dt` seconds.
    ///
    /// When the elapsed time reaches the duration the end value is returned
    /// as [`CycleStep::Completed`] and the counter resets; in
    /// [`LoopMode::PingPong`] start and end are swapped as well.
    pub fn advance(&mut self, dt: f32, mode: LoopMode) -> CycleStep<T> {
        self.elapsed += dt.max(0.0);
        let value = self.value();
        if self.elapsed >= self.duration {
            if mode == LoopMode::PingPong {
                std::mem::swap(&mut self.start, &mut self.end);
            }
            self.elapsed = 0.0;
            CycleStep::Completed(value)
        } else {
            CycleStep::Running(value)
        }
    }
}
