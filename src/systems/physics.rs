//! Rigid body integration.
//!
//! Dynamic bodies consume their queued impulse, accumulate acceleration from
//! enabled forces and move by their velocity. Bodies never sink below the
//! ground plane from [`PhysicsSettings`]; landing zeroes downward velocity.
//! Static and kinematic bodies are left to gameplay code.
use bevy_ecs::prelude::*;

use crate::components::rigidbody::{RigidBody, RigidBodyType};
use crate::components::transform::Transform3D;
use crate::resources::physicssettings::PhysicsSettings;
use crate::resources::worldtime::WorldTime;

pub fn physics_step(
    mut query: Query<(&mut Transform3D, &mut RigidBody)>,
    time: Res<WorldTime>,
    settings: Res<PhysicsSettings>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut transform, mut body) in query.iter_mut() {
        if body.body_type != RigidBodyType::Dynamic {
            body.take_impulse();
            continue;
        }
        let inv_mass = if body.mass > 0.0 { 1.0 / body.mass } else { 1.0 };
        let impulse = body.take_impulse();
        let accel = body.total_acceleration();
        body.velocity += impulse * inv_mass + accel * dt;

        let delta = body.velocity * dt;
        transform.position += delta;

        if transform.position.z < settings.ground_height {
            transform.position.z = settings.ground_height;
            if body.velocity.z < 0.0 {
                body.velocity.z = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPSILON: f32 = 1e-4;

    fn make_world(dt: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: dt,
            ..Default::default()
        });
        world.insert_resource(PhysicsSettings::default());
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(physics_step);
        schedule.run(world);
    }

    #[test]
    fn test_impulse_applied_once() {
        let mut world = make_world(0.1);
        let mut body = RigidBody::dynamic();
        body.apply_impulse(Vec3::new(0.0, 0.0, 6.0));
        let e = world.spawn((Transform3D::from_position(Vec3::new(0.0, 0.0, 1.0)), body)).id();
        tick(&mut world);
        let t = world.get::<Transform3D>(e).unwrap();
        assert!((t.position.z - 1.6).abs() < EPSILON);
        tick(&mut world);
        let t = world.get::<Transform3D>(e).unwrap();
        assert!((t.position.z - 2.2).abs() < EPSILON);
    }

    #[test]
    fn test_mass_scales_impulse() {
        let mut world = make_world(1.0);
        let mut body = RigidBody::dynamic().with_mass(2.0);
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        let e = world.spawn((Transform3D::from_position(Vec3::new(0.0, 0.0, 1.0)), body)).id();
        tick(&mut world);
        assert!((world.get::<RigidBody>(e).unwrap().velocity.x - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_ground_clamp_stops_fall() {
        let mut world = make_world(0.5);
        let mut body = RigidBody::dynamic();
        body.add_force("gravity", Vec3::new(0.0, 0.0, -9.81));
        let e = world.spawn((Transform3D::from_position(Vec3::new(0.0, 0.0, 1.0)), body)).id();
        tick(&mut world);
        let t = world.get::<Transform3D>(e).unwrap();
        assert!((t.position.z - 0.5).abs() < EPSILON);
        assert_eq!(world.get::<RigidBody>(e).unwrap().velocity.z, 0.0);
    }

    #[test]
    fn test_static_body_ignores_impulse() {
        let mut world = make_world(0.1);
        let mut body = RigidBody::default();
        body.apply_impulse(Vec3::new(0.0, 0.0, 6.0));
        let e = world.spawn((Transform3D::from_position(Vec3::new(0.0, 0.0, 1.0)), body)).id();
        tick(&mut world);
        assert_eq!(world.get::<Transform3D>(e).unwrap().position.z, 1.0);
        assert_eq!(world.get::<RigidBody>(e).unwrap().pending_impulse, Vec3::ZERO);
    }

    #[test]
    fn test_zero_dt_keeps_pending_impulse() {
        let mut world = make_world(0.0);
        let mut body = RigidBody::dynamic();
        body.apply_impulse(Vec3::new(0.0, 0.0, 6.0));
        let e = world.spawn((Transform3D::default(), body)).id();
        tick(&mut world);
        assert_eq!(
            world.get::<RigidBody>(e).unwrap().pending_impulse,
            Vec3::new(0.0, 0.0, 6.0)
        );
    }
}
