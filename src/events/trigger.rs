//! Trigger-volume events and the trigger response observers.
//!
//! [`trigger_volume_system`](crate::systems::trigger::trigger_volume_system)
//! emits [`TriggerEnterEvent`] when a collider starts overlapping a volume and
//! [`TriggerLeaveEvent`] when it stops. The observers here implement the
//! player's [`TriggerResponse`]:
//!
//! - on enter: log, mark occupied, check the win band, and on contact with
//!   the hazard respawn the player, take a life and publish hurt/lost events
//! - on leave: log and clear the occupied flag
//!
//! Outcomes are published as events from [`crate::events::outcome`]; nothing
//! here writes into the player controller directly.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};

use crate::components::objectname::ObjectName;
use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform3D;
use crate::components::triggerresponse::TriggerResponse;
use crate::events::outcome::{GameLostEvent, GameWonEvent, PlayerHurtEvent};
use crate::scene::error::LookupError;
use crate::scene::lookup::find_by_name_in;

/// A collider started overlapping a trigger volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEnterEvent {
    /// Entity owning the volume.
    pub volume: Entity,
    /// Entity that entered.
    pub other: Entity,
}

/// A collider stopped overlapping a trigger volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerLeaveEvent {
    pub volume: Entity,
    pub other: Entity,
}

fn name_or_id(names: &Query<(Entity, &ObjectName)>, entity: Entity) -> String {
    names
        .get(entity)
        .map(|(_, n)| n.name().to_string())
        .unwrap_or_else(|_| format!("{entity:?}"))
}

fn y_of(
    names: &Query<(Entity, &ObjectName)>,
    transforms: &Query<&mut Transform3D>,
    name: &str,
) -> Result<f32, LookupError> {
    let entity = find_by_name_in(names.iter(), name)?;
    transforms
        .get(entity)
        .map(|t| t.position.y)
        .map_err(|_| LookupError::MissingComponent {
            entity,
            component: "Transform3D",
        })
}

/// Observer reacting to something entering the player's trigger volume.
pub fn on_trigger_enter(
    trigger: On<TriggerEnterEvent>,
    mut responders: Query<&mut TriggerResponse>,
    mut transforms: Query<&mut Transform3D>,
    mut bodies: Query<&mut RigidBody>,
    names: Query<(Entity, &ObjectName)>,
    mut commands: Commands,
) {
    let TriggerEnterEvent { volume, other } = *trigger.event();
    let Ok(mut response) = responders.get_mut(volume) else {
        return;
    };

    let volume_name = name_or_id(&names, volume);
    let other_name = name_or_id(&names, other);
    info!(
        "Body has entered {} trigger volume: {}",
        volume_name, other_name
    );
    response.player_in_trigger = true;

    // Evaluated before any respawn so it sees the positions at contact time.
    let overlap = match (
        y_of(&names, &transforms, &response.config.hazard_name),
        y_of(&names, &transforms, &response.config.projectile_name),
    ) {
        (Ok(hazard_y), Ok(projectile_y)) => response.overlaps(hazard_y, projectile_y),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Skipping win check: {}", e);
            false
        }
    };

    if other_name == response.config.hazard_name {
        info!("{} hit by {}", volume_name, other_name);
        if let Ok(mut transform) = transforms.get_mut(volume) {
            transform.position = response.config.spawn_point;
        }
        if let Ok(mut body) = bodies.get_mut(volume) {
            body.velocity = Vec3::ZERO;
        }
        commands.trigger(PlayerHurtEvent { player: volume });
        if response.lose_life() {
            info!("{} is out of lives", volume_name);
            commands.trigger(GameLostEvent { player: volume });
        }
    }

    if overlap {
        commands.trigger(GameWonEvent { player: volume });
    }
}

/// Observer clearing the occupied flag when something leaves the volume.
pub fn on_trigger_leave(
    trigger: On<TriggerLeaveEvent>,
    mut responders: Query<&mut TriggerResponse>,
    names: Query<(Entity, &ObjectName)>,
) {
    let TriggerLeaveEvent { volume, other } = *trigger.event();
    let Ok(mut response) = responders.get_mut(volume) else {
        return;
    };
    response.player_in_trigger = false;
    info!(
        "Body has left {} trigger volume: {}",
        name_or_id(&names, volume),
        name_or_id(&names, other)
    );
}
