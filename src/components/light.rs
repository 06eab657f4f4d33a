//! Lights and render descriptors.
//!
//! Drawing is done by an external renderer; these components only record
//! what the scene asks it to draw.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Point light.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub radius: f32,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            radius: 10.0,
            intensity: 1.0,
        }
    }
}

/// Mesh and material asset names used to draw an object.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct RenderComponent {
    pub mesh: String,
    pub material: String,
}

impl RenderComponent {
    pub fn new(mesh: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            material: material.into(),
        }
    }
}
