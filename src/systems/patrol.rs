//! Patrol controller system.
//!
//! Advances every [`PatrolBehaviour`] and writes the interpolated keyframe to
//! its target. The game-over key (Enter) freezes all patrols for good.
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::objectname::ObjectName;
use crate::components::orbitmover::OrbitMover;
use crate::components::patrol::{PatrolBehaviour, PatrolTarget, apply_keyframe};
use crate::components::transform::Transform3D;
use crate::resources::input::{InputState, KeyCode};
use crate::resources::worldtime::WorldTime;
use crate::scene::lookup::display_name;

pub fn patrol_system(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut patrols: Query<(
        Entity,
        &mut PatrolBehaviour,
        &mut Transform3D,
        Option<&mut OrbitMover>,
    )>,
    names: Query<&ObjectName>,
) {
    let dt = time.delta;
    let game_over = input.just_pressed(KeyCode::Enter);

    for (entity, mut patrol, mut transform, mover) in patrols.iter_mut() {
        if let Some(step) = patrol.advance(dt) {
            let value = step.value();
            match patrol.config.target {
                PatrolTarget::OwnPosition => apply_keyframe(&mut transform.position, value),
                PatrolTarget::MoverCenter => match mover {
                    Some(mut mover) => apply_keyframe(&mut mover.center, value),
                    None => warn!(
                        "{} patrols a mover centre but has no OrbitMover",
                        display_name(&names, entity)
                    ),
                },
            }
            let spin = patrol.config.speed * dt;
            transform.rotation += spin;
        }

        if game_over && !patrol.frozen {
            patrol.frozen = true;
            info!("{} patrol frozen", display_name(&names, entity));
        }
    }
}
