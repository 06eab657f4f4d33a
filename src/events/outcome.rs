//! Game outcome events and their observers.
//!
//! The trigger response and the player controller publish outcomes here
//! instead of reaching into each other's components:
//!
//! - [`PlayerHurtEvent`] – starts the hurt colour grade on the player
//! - [`GameWonEvent`] – latches `win` on the player controller
//! - [`GameLostEvent`] – latches `lose`, shows the lose screen, narrows focus
//! - [`RestartRequestedEvent`] – refills lives after a loss
//!
//! All observers resolve their targets through the event's player entity or
//! [`SceneHandles`]; a missing target is logged and skipped.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::camera::{Camera, MainCamera, NARROW_FOCAL_DEPTH};
use crate::components::guipanel::GuiPanel;
use crate::components::jump::JumpBehaviour;
use crate::components::triggerresponse::TriggerResponse;
use crate::resources::scenehandles::{SceneHandles, SceneRole};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHurtEvent {
    pub player: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWonEvent {
    pub player: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLostEvent {
    pub player: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartRequestedEvent {
    pub player: Entity,
}

/// Narrow every main camera to the game-over focal depth.
pub fn narrow_focus(cameras: &mut Query<&mut Camera, With<MainCamera>>) {
    for mut camera in cameras.iter_mut() {
        camera.focal_depth = NARROW_FOCAL_DEPTH;
    }
}

/// Show or hide the panel registered under `role`.
pub fn set_panel_enabled(
    handles: &SceneHandles,
    panels: &mut Query<&mut GuiPanel>,
    role: SceneRole,
    enabled: bool,
) {
    let result = handles.get(role).and_then(|entity| {
        panels
            .get_mut(entity)
            .map(|mut panel| panel.enabled = enabled)
            .map_err(|_| crate::scene::error::LookupError::MissingComponent {
                entity,
                component: "GuiPanel",
            })
    });
    if let Err(e) = result {
        warn!("Cannot update {:?} panel: {}", role, e);
    }
}

pub fn on_player_hurt(trigger: On<PlayerHurtEvent>, mut players: Query<&mut JumpBehaviour>) {
    let player = trigger.event().player;
    match players.get_mut(player) {
        Ok(mut jump) => jump.is_hurt = true,
        Err(_) => warn!("Hurt event for {:?}, which has no JumpBehaviour", player),
    }
}

pub fn on_game_won(trigger: On<GameWonEvent>, mut players: Query<&mut JumpBehaviour>) {
    let player = trigger.event().player;
    match players.get_mut(player) {
        Ok(mut jump) => {
            if !jump.win {
                info!("Game won");
            }
            jump.win = true;
        }
        Err(_) => warn!("Win event for {:?}, which has no JumpBehaviour", player),
    }
}

pub fn on_game_lost(
    trigger: On<GameLostEvent>,
    mut players: Query<&mut JumpBehaviour>,
    mut panels: Query<&mut GuiPanel>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
    handles: Res<SceneHandles>,
) {
    let player = trigger.event().player;
    info!("Game lost");
    match players.get_mut(player) {
        Ok(mut jump) => jump.lose = true,
        Err(_) => warn!("Lose event for {:?}, which has no JumpBehaviour", player),
    }
    set_panel_enabled(&handles, &mut panels, SceneRole::LoseScreen, true);
    narrow_focus(&mut cameras);
}

pub fn on_restart_requested(
    trigger: On<RestartRequestedEvent>,
    mut responders: Query<&mut TriggerResponse>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
) {
    let player = trigger.event().player;
    match responders.get_mut(player) {
        Ok(mut response) => {
            response.reset_lives();
            info!("Restart requested, lives reset to {}", response.lives);
        }
        Err(_) => warn!("Restart for {:?}, which has no TriggerResponse", player),
    }
    narrow_focus(&mut cameras);
}
