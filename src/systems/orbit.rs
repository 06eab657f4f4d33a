use bevy_ecs::prelude::*;

use crate::components::orbitmover::OrbitMover;
use crate::components::transform::Transform3D;
use crate::resources::worldtime::WorldTime;

/// Move each orbiting entity along its circle.
///
/// Runs after the patrol system so a patrolled centre takes effect the same
/// frame.
pub fn orbit_mover_system(
    mut query: Query<(&mut OrbitMover, &mut Transform3D)>,
    time: Res<WorldTime>,
) {
    for (mut mover, mut transform) in query.iter_mut() {
        transform.position = mover.advance(time.delta);
    }
}
