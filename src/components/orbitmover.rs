//! Circular mover.
//!
//! [`OrbitMover`] keeps an entity on a circle in the XY plane around
//! `center`. The patrol controller can drive `center` to make the whole orbit
//! bob up and down.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitMover {
    /// Orbit centre; `center.z` is the height the entity is placed at.
    pub center: Vec3,
    /// Angular speed in degrees per second.
    pub speed: f32,
    pub radius: f32,
    /// Current angle in degrees.
    pub angle: f32,
}

impl OrbitMover {
    pub fn new(center: Vec3, speed: f32, radius: f32) -> Self {
        Self {
            center,
            speed,
            radius,
            angle: 0.0,
        }
    }

    /// Advance the angle and return the resulting position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.angle = (self.angle + self.speed * dt).rem_euclid(360.0);
        self.position()
    }

    pub fn position(&self) -> Vec3 {
        let rad = self.angle.to_radians();
        Vec3::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
            self.center.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_quarter_turn() {
        let mut mover = OrbitMover::new(Vec3::new(0.0, 0.0, 2.0), 90.0, 6.0);
        let p = mover.advance(1.0);
        assert!(p.x.abs() < EPSILON);
        assert!((p.y - 6.0).abs() < EPSILON);
        assert!((p.z - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_wraps() {
        let mut mover = OrbitMover::new(Vec3::ZERO, 100.0, 1.0);
        mover.advance(4.0);
        assert!((mover.angle - 40.0).abs() < EPSILON);
    }
}
