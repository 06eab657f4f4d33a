//! Local transform of a scene object.
//!
//! Every object in the scene tree carries a [`Transform3D`]. Positions are
//! written directly by gameplay behaviours (movement, patrol, teleport on
//! hit) and integrated by the physics step for dynamic bodies.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position, euler rotation (degrees) and scale of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Move the entity by `delta` in world units.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Orient the entity towards `target` (yaw/pitch only, degrees).
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        let yaw = dir.y.atan2(dir.x).to_degrees();
        let flat = (dir.x * dir.x + dir.y * dir.y).sqrt();
        let pitch = dir.z.atan2(flat).to_degrees();
        self.rotation = Vec3::new(pitch, 0.0, yaw);
    }
}
