//! Rigid body component with impulses and named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity, pending impulses and named
//! acceleration forces for an entity. Each force can be individually
//! enabled/disabled, allowing game logic to toggle forces like gravity
//! independently.
//!
//! Impulses are accumulated by gameplay code (e.g. the jump controller) and
//! consumed by [`physics_step`](crate::systems::physics::physics_step) on the
//! next tick.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use rustc_hash::FxHashMap;

/// How the physics step treats a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RigidBodyType {
    /// Never moves.
    #[default]
    Static,
    /// Moved only by gameplay code; ignores forces and impulses.
    Kinematic,
    /// Integrated by the physics step.
    Dynamic,
}

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    /// The acceleration vector in world units per second squared.
    pub value: Vec3,
    /// Whether this force is currently active.
    pub enabled: bool,
}

impl AccelerationForce {
    /// Create a new enabled acceleration force.
    pub fn new(value: Vec3) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Physics body storing velocity, impulses and named acceleration forces.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::dynamic();
/// rb.add_force("gravity", Vec3::new(0.0, 0.0, -9.81));
/// rb.apply_impulse(Vec3::new(0.0, 0.0, 6.0));
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub body_type: RigidBodyType,
    /// Current velocity in world units per second.
    pub velocity: Vec3,
    /// Body mass; impulses are divided by it.
    pub mass: f32,
    /// Impulse accumulated since the last physics step.
    pub pending_impulse: Vec3,
    /// Named acceleration forces. The total acceleration is the sum of all enabled forces.
    pub forces: FxHashMap<String, AccelerationForce>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(RigidBodyType::Static)
    }
}

impl RigidBody {
    pub fn new(body_type: RigidBodyType) -> Self {
        Self {
            body_type,
            velocity: Vec3::ZERO,
            mass: 1.0,
            pending_impulse: Vec3::ZERO,
            forces: FxHashMap::default(),
        }
    }

    /// Dynamic body with zero velocity and no forces.
    pub fn dynamic() -> Self {
        Self::new(RigidBodyType::Dynamic)
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Queue an impulse; applied on the next physics step.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.pending_impulse += impulse;
    }

    /// Take the queued impulse, leaving zero behind.
    pub fn take_impulse(&mut self) -> Vec3 {
        std::mem::replace(&mut self.pending_impulse, Vec3::ZERO)
    }

    /// Add or update a named acceleration force (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vec3) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Enable or disable a specific force by name.
    /// Returns false if the force doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Check if a force exists and is enabled.
    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).map(|f| f.enabled).unwrap_or(false)
    }

    /// Calculate the total acceleration from all enabled forces.
    pub fn total_acceleration(&self) -> Vec3 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vec3::ZERO, |acc, f| acc + f.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_default_is_static() {
        let rb = RigidBody::default();
        assert_eq!(rb.body_type, RigidBodyType::Static);
        assert_eq!(rb.velocity, Vec3::ZERO);
        assert!(rb.forces.is_empty());
    }

    #[test]
    fn test_impulses_accumulate_until_taken() {
        let mut rb = RigidBody::dynamic();
        rb.apply_impulse(Vec3::new(0.0, 0.0, 2.0));
        rb.apply_impulse(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(rb.take_impulse(), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(rb.take_impulse(), Vec3::ZERO);
    }

    #[test]
    fn test_total_acceleration_skips_disabled_forces() {
        let mut rb = RigidBody::dynamic();
        rb.add_force("gravity", Vec3::new(0.0, 0.0, -9.81));
        rb.add_force("wind", Vec3::new(1.0, 0.0, 0.0));
        assert!(rb.set_force_enabled("wind", false));
        assert!(!rb.set_force_enabled("missing", false));
        assert_eq!(rb.total_acceleration(), Vec3::new(0.0, 0.0, -9.81));
        assert!(rb.is_force_enabled("gravity"));
        assert!(!rb.is_force_enabled("wind"));
    }
}
