//! Particle system component.
//!
//! The [`ParticleSystem`] component describes a sphere emitter attached to a
//! scene object. Particle simulation and drawing belong to the renderer; this
//! crate only tracks whether the system is enabled and how many emissions it
//! has produced, which is what gameplay toggles (foot trail, celebration
//! burst) observe.
//!
//! # Related
//!
//! - [`crate::systems::particles::particle_system_tick`] – accumulates time and counts emissions

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3, Vec4};

/// Emits particles from random points inside a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereEmitter {
    /// Seconds between emissions. If <= 0, nothing is emitted.
    pub interval: f32,
    /// Initial particle velocity.
    pub velocity: Vec3,
    /// Radius of the spawn sphere.
    pub radius: f32,
    /// Particle lifetime range in seconds, stored as (min, max).
    pub life_range: Vec2,
    /// Particle size range, stored as (min, max).
    pub size_range: Vec2,
    /// RGBA particle colour.
    pub color: Vec4,
    /// Atlas index of the particle sprite.
    pub tex_id: u32,
}

impl Default for SphereEmitter {
    fn default() -> Self {
        Self {
            interval: 0.02,
            velocity: Vec3::ZERO,
            radius: 1.0,
            life_range: Vec2::new(0.5, 1.0),
            size_range: Vec2::new(0.5, 1.5),
            color: Vec4::ONE,
            tex_id: 0,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct ParticleSystem {
    pub enabled: bool,
    pub emitter: SphereEmitter,
    /// Time accumulated towards the next emission.
    pub accumulator: f32,
    /// Total emissions since the system was created.
    pub emitted: u64,
}

impl ParticleSystem {
    pub fn new(emitter: SphereEmitter) -> Self {
        Self {
            enabled: true,
            emitter,
            accumulator: 0.0,
            emitted: 0,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
