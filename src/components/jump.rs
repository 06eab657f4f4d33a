//! Player controller: jump, planar movement and the player-side game state.
//!
//! [`JumpBehaviour`] holds the persisted tuning ([`JumpConfig`]) plus the
//! runtime flags the controller keeps between frames: lighting toggles, the
//! hurt timer, the outline pulse and the win/lose latches.
//!
//! # Related
//!
//! - [`crate::systems::jump::jump_awake_system`] – self-disables bodies without a `RigidBody`
//! - [`crate::systems::jump::jump_behaviour_system`] – per-frame update
//! - [`crate::events::outcome`] – hurt/win/lose events that set the flags

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::behaviour::{Behaviour, Inspector};
use crate::components::tween::LinearCycle;
use crate::scene::error::{SceneError, config_from_json};

/// Persisted tuning of the player controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Upward impulse applied on jump.
    pub impulse: f32,
    /// Per-axis movement speed in units per second.
    pub move_speeds: Vec3,
    /// Highest z at which the player counts as grounded.
    pub ground_threshold: f32,
    /// Seconds the hurt colour grade stays on.
    pub hurt_duration: f32,
    /// Seconds for one half of the outline pulse.
    pub pulse_duration: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            impulse: 6.0,
            move_speeds: Vec3::new(2.0, 2.0, 1.0),
            ground_threshold: 1.0,
            hurt_duration: 0.4,
            pulse_duration: 2.0,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct JumpBehaviour {
    pub config: JumpConfig,
    /// Cleared on awake when the entity has no rigid body.
    pub enabled: bool,
    /// Panel toggled on each jump. Does not keep the panel alive.
    pub panel: Option<Entity>,
    pub is_hurt: bool,
    pub hurt_elapsed: f32,
    pub ambient_on: bool,
    pub diffuse_on: bool,
    pub specular_on: bool,
    pub color_correct_on: bool,
    /// Red channel of the outline colour, ping-ponging 0 to 1.
    pub pulse: LinearCycle<f32>,
    pub win: bool,
    pub lose: bool,
}

impl Default for JumpBehaviour {
    fn default() -> Self {
        Self::new(JumpConfig::default())
    }
}

impl JumpBehaviour {
    pub fn new(config: JumpConfig) -> Self {
        Self {
            config,
            enabled: true,
            panel: None,
            is_hurt: false,
            hurt_elapsed: 0.0,
            ambient_on: true,
            diffuse_on: true,
            specular_on: true,
            color_correct_on: true,
            pulse: LinearCycle::new(0.0, 1.0, config.pulse_duration),
            win: false,
            lose: false,
        }
    }

    pub fn with_impulse(mut self, impulse: f32) -> Self {
        self.config.impulse = impulse;
        self
    }

    pub fn with_panel(mut self, panel: Entity) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn is_grounded(&self, z: f32) -> bool {
        z <= self.config.ground_threshold
    }
}

impl Behaviour for JumpBehaviour {
    const TYPE_NAME: &'static str = "JumpBehaviour";

    fn to_json(&self) -> serde_json::Value {
        let c = &self.config;
        serde_json::json!({
            "impulse": c.impulse,
            "move_speeds": [c.move_speeds.x, c.move_speeds.y, c.move_speeds.z],
            "ground_threshold": c.ground_threshold,
            "hurt_duration": c.hurt_duration,
            "pulse_duration": c.pulse_duration,
        })
    }

    fn from_json(value: &serde_json::Value) -> Result<Self, SceneError> {
        let config: JumpConfig = config_from_json(Self::TYPE_NAME, value)?;
        Ok(Self::new(config))
    }

    fn reconfigure(&mut self, fresh: Self) {
        self.pulse.duration = fresh.config.pulse_duration;
        self.config = fresh.config;
    }

    fn inspect(&mut self, inspector: &mut Inspector) {
        inspector.drag_float("Impulse", &mut self.config.impulse);
    }
}
