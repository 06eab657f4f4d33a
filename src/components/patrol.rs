//! Keyframe patrol controller.
//!
//! [`PatrolBehaviour`] interpolates between two keyframes over a fixed
//! duration and writes the result either to the entity's own position or to
//! the centre of its [`OrbitMover`](crate::components::orbitmover::OrbitMover).
//! The [`LoopMode`] policy decides what happens when a cycle completes:
//!
//! - `PingPong` swaps start and end and keeps going until frozen
//! - `OneShot` disarms itself until [`PatrolBehaviour::rearm`] is called
//!
//! Scalar keyframes drive only the z component of the target; vector
//! keyframes replace the whole vector.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::behaviour::{Behaviour, Inspector};
use crate::components::tween::{CycleStep, Keyframe, LinearCycle, LoopMode};
use crate::scene::error::{SceneError, config_from_json};

/// What the interpolated value is written to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolTarget {
    OwnPosition,
    MoverCenter,
}

/// Persisted configuration of a patrol.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatrolConfig {
    /// Euler rotation speed in degrees per second.
    pub speed: Vec3,
    pub start: Keyframe,
    pub end: Keyframe,
    pub duration: f32,
    pub policy: LoopMode,
    pub target: PatrolTarget,
}

/// Running interpolation, typed by keyframe kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PatrolKeys {
    Scalar(LinearCycle<f32>),
    Vector(LinearCycle<Vec3>),
}

impl PatrolKeys {
    fn from_keyframes(start: Keyframe, end: Keyframe, duration: f32) -> Result<Self, SceneError> {
        match (start, end) {
            (Keyframe::Scalar(a), Keyframe::Scalar(b)) => {
                Ok(PatrolKeys::Scalar(LinearCycle::new(a, b, duration)))
            }
            (Keyframe::Vector(a), Keyframe::Vector(b)) => {
                Ok(PatrolKeys::Vector(LinearCycle::new(a, b, duration)))
            }
            _ => Err(SceneError::MismatchedKeyframes),
        }
    }

    pub fn elapsed(&self) -> f32 {
        match self {
            PatrolKeys::Scalar(c) => c.elapsed,
            PatrolKeys::Vector(c) => c.elapsed,
        }
    }

    /// Current start keyframe (swapped after each ping-pong cycle).
    pub fn start(&self) -> Keyframe {
        match self {
            PatrolKeys::Scalar(c) => Keyframe::Scalar(c.start),
            PatrolKeys::Vector(c) => Keyframe::Vector(c.start),
        }
    }

    fn advance(&mut self, dt: f32, mode: LoopMode) -> CycleStep<Keyframe> {
        match self {
            PatrolKeys::Scalar(c) => match c.advance(dt, mode) {
                CycleStep::Running(v) => CycleStep::Running(Keyframe::Scalar(v)),
                CycleStep::Completed(v) => CycleStep::Completed(Keyframe::Scalar(v)),
            },
            PatrolKeys::Vector(c) => match c.advance(dt, mode) {
                CycleStep::Running(v) => CycleStep::Running(Keyframe::Vector(v)),
                CycleStep::Completed(v) => CycleStep::Completed(Keyframe::Vector(v)),
            },
        }
    }

    pub fn duration(&self) -> f32 {
        match self {
            PatrolKeys::Scalar(c) => c.duration,
            PatrolKeys::Vector(c) => c.duration,
        }
    }

    fn set_duration(&mut self, duration: f32) {
        match self {
            PatrolKeys::Scalar(c) => c.duration = duration,
            PatrolKeys::Vector(c) => c.duration = duration,
        }
    }

    fn reset(&mut self) {
        match self {
            PatrolKeys::Scalar(c) => c.elapsed = 0.0,
            PatrolKeys::Vector(c) => c.elapsed = 0.0,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct PatrolBehaviour {
    pub config: PatrolConfig,
    pub keys: PatrolKeys,
    /// One-shot patrols only run while armed.
    pub armed: bool,
    /// Set by the game-over key; a frozen patrol never moves again.
    pub frozen: bool,
}

impl PatrolBehaviour {
    pub fn new(config: PatrolConfig) -> Result<Self, SceneError> {
        let keys = PatrolKeys::from_keyframes(config.start, config.end, config.duration)?;
        Ok(Self {
            config,
            keys,
            armed: true,
            frozen: false,
        })
    }

    /// Scalar ping-pong on the mover centre's height.
    pub fn bobbing(a: f32, b: f32, duration: f32) -> Self {
        Self {
            config: PatrolConfig {
                speed: Vec3::ZERO,
                start: Keyframe::Scalar(a),
                end: Keyframe::Scalar(b),
                duration,
                policy: LoopMode::PingPong,
                target: PatrolTarget::MoverCenter,
            },
            keys: PatrolKeys::Scalar(LinearCycle::new(a, b, duration)),
            armed: true,
            frozen: false,
        }
    }

    /// Vector one-shot moving the entity itself.
    pub fn one_shot(start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            config: PatrolConfig {
                speed: Vec3::ZERO,
                start: Keyframe::Vector(start),
                end: Keyframe::Vector(end),
                duration,
                policy: LoopMode::OneShot,
                target: PatrolTarget::OwnPosition,
            },
            keys: PatrolKeys::Vector(LinearCycle::new(start, end, duration)),
            armed: true,
            frozen: false,
        }
    }

    pub fn with_rotation_speed(mut self, speed: Vec3) -> Self {
        self.config.speed = speed;
        self
    }

    /// Restart a one-shot patrol from the beginning.
    pub fn rearm(&mut self) {
        self.keys.reset();
        self.armed = true;
    }

    pub fn is_active(&self) -> bool {
        !self.frozen && (self.armed || self.config.policy == LoopMode::PingPong)
    }

    /// Advance by `dt`. Returns the value to write, or `None` while frozen
    /// or disarmed.
    pub fn advance(&mut self, dt: f32) -> Option<CycleStep<Keyframe>> {
        if !self.is_active() {
            return None;
        }
        let step = self.keys.advance(dt, self.config.policy);
        if step.is_completed() && self.config.policy == LoopMode::OneShot {
            self.armed = false;
        }
        Some(step)
    }
}

/// Write a keyframe value into `target`: scalars replace z only.
pub fn apply_keyframe(target: &mut Vec3, value: Keyframe) {
    match value {
        Keyframe::Scalar(z) => target.z = z,
        Keyframe::Vector(v) => *target = v,
    }
}

impl Behaviour for PatrolBehaviour {
    const TYPE_NAME: &'static str = "PatrolBehaviour";

    fn to_json(&self) -> serde_json::Value {
        let c = &self.config;
        let keyframe = |k: Keyframe| match k {
            Keyframe::Scalar(s) => serde_json::json!(s),
            Keyframe::Vector(v) => serde_json::json!([v.x, v.y, v.z]),
        };
        serde_json::json!({
            "speed": [c.speed.x, c.speed.y, c.speed.z],
            "start": keyframe(c.start),
            "end": keyframe(c.end),
            "duration": c.duration,
            "policy": c.policy,
            "target": c.target,
        })
    }

    fn from_json(value: &serde_json::Value) -> Result<Self, SceneError> {
        let config: PatrolConfig = config_from_json(Self::TYPE_NAME, value)?;
        Self::new(config)
    }

    /// The running cycle restarts only when the keyframes, duration or
    /// policy change.
    fn reconfigure(&mut self, fresh: Self) {
        let old = &self.config;
        let new = &fresh.config;
        let cycle_changed = old.start != new.start
            || old.end != new.end
            || old.duration != new.duration
            || old.policy != new.policy;
        if cycle_changed {
            self.keys = fresh.keys;
        }
        self.config = fresh.config;
    }

    fn inspect(&mut self, inspector: &mut Inspector) {
        inspector.drag_vec3("Speed", &mut self.config.speed);
        if inspector.drag_float("Duration", &mut self.config.duration) {
            self.keys.set_duration(self.config.duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_mismatched_keyframes_rejected() {
        let config = PatrolConfig {
            speed: Vec3::ZERO,
            start: Keyframe::Scalar(0.0),
            end: Keyframe::Vector(Vec3::ONE),
            duration: 1.0,
            policy: LoopMode::PingPong,
            target: PatrolTarget::OwnPosition,
        };
        assert!(matches!(
            PatrolBehaviour::new(config),
            Err(SceneError::MismatchedKeyframes)
        ));
    }

    #[test]
    fn test_one_shot_disarms_and_rearms() {
        let mut patrol = PatrolBehaviour::one_shot(Vec3::ZERO, Vec3::X, 1.0);
        let step = patrol.advance(1.0).unwrap();
        assert!(step.is_completed());
        assert!(!patrol.armed);
        assert!(approx_eq(patrol.keys.elapsed(), 0.0));
        assert!(patrol.advance(0.5).is_none());

        patrol.rearm();
        let step = patrol.advance(0.5).unwrap();
        assert_eq!(step, CycleStep::Running(Keyframe::Vector(Vec3::new(0.5, 0.0, 0.0))));
    }

    #[test]
    fn test_frozen_patrol_does_not_advance() {
        let mut patrol = PatrolBehaviour::bobbing(0.0, 3.0, 4.0);
        patrol.frozen = true;
        assert!(patrol.advance(1.0).is_none());
        assert!(approx_eq(patrol.keys.elapsed(), 0.0));
    }

    #[test]
    fn test_apply_scalar_only_touches_z() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        apply_keyframe(&mut v, Keyframe::Scalar(9.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 9.0));
        apply_keyframe(&mut v, Keyframe::Vector(Vec3::ZERO));
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_json_persists_config_not_progress() {
        let mut patrol = PatrolBehaviour::bobbing(0.0, 3.0, 4.0).with_rotation_speed(Vec3::new(0.0, 0.0, 90.0));
        patrol.advance(4.0);
        let value = patrol.to_json();
        assert_eq!(value["start"], serde_json::json!(0.0));
        assert_eq!(value["speed"], serde_json::json!([0.0, 0.0, 90.0]));
        assert_eq!(value["policy"], serde_json::json!("PingPong"));
        let back = PatrolBehaviour::from_json(&value).unwrap();
        assert_eq!(back.config, patrol.config);
        assert_eq!(back.keys.start(), Keyframe::Scalar(0.0));
    }

    #[test]
    fn test_duration_edit_retimes_running_cycle() {
        let mut patrol = PatrolBehaviour::bobbing(0.0, 3.0, 4.0);
        let mut inspector = Inspector::new();
        inspector.queue_edit("Bob", "Duration", 1.0);
        inspector.begin("Bob");
        patrol.inspect(&mut inspector);

        assert_eq!(patrol.config.duration, 1.0);
        assert_eq!(patrol.keys.duration(), 1.0);
        let step = patrol.advance(1.0).unwrap();
        assert!(step.is_completed());
        assert_eq!(step.value(), Keyframe::Scalar(3.0));
    }

    #[test]
    fn test_reconfigure_keeps_runtime_state() {
        let mut patrol = PatrolBehaviour::bobbing(0.0, 3.0, 4.0);
        patrol.advance(1.0);
        patrol.frozen = true;

        let same_cycle = PatrolBehaviour::bobbing(0.0, 3.0, 4.0).with_rotation_speed(Vec3::Z);
        patrol.reconfigure(same_cycle);
        assert!(patrol.frozen);
        assert_eq!(patrol.config.speed, Vec3::Z);
        assert!(approx_eq(patrol.keys.elapsed(), 1.0));

        patrol.reconfigure(PatrolBehaviour::bobbing(0.0, 5.0, 2.0));
        assert!(patrol.frozen);
        assert_eq!(patrol.keys.elapsed(), 0.0);
        assert_eq!(patrol.keys.duration(), 2.0);
    }
}
