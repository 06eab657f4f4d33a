//! Trigger-volume overlap detection.
//!
//! Every entity with a [`TriggerVolume`] and a [`BoxCollider3D`] is tested
//! against every other collider. Overlaps that begin this frame trigger
//! [`TriggerEnterEvent`]; overlaps that ended (including colliders that were
//! despawned) trigger [`TriggerLeaveEvent`]. The set of current overlaps is
//! stored back on the volume for the next frame.
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::collider::{BoxCollider3D, TriggerVolume};
use crate::components::transform::Transform3D;
use crate::events::trigger::{TriggerEnterEvent, TriggerLeaveEvent};

pub fn trigger_volume_system(
    mut volumes: Query<(Entity, &Transform3D, &BoxCollider3D, &mut TriggerVolume)>,
    colliders: Query<(Entity, &Transform3D, &BoxCollider3D)>,
    mut commands: Commands,
) {
    for (volume, volume_pos, volume_box, mut state) in volumes.iter_mut() {
        let mut current: SmallVec<[Entity; 4]> = SmallVec::new();
        for (other, other_pos, other_box) in colliders.iter() {
            if other == volume {
                continue;
            }
            if volume_box.overlaps(volume_pos.position, other_box, other_pos.position) {
                current.push(other);
            }
        }

        for &other in current.iter() {
            if !state.contains(other) {
                commands.trigger(TriggerEnterEvent { volume, other });
            }
        }
        for &other in state.overlapping.iter() {
            if !current.contains(&other) {
                commands.trigger(TriggerLeaveEvent { volume, other });
            }
        }
        if state.overlapping != current {
            state.overlapping = current;
        }
    }
}
