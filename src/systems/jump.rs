//! Player controller systems.
//!
//! - [`jump_awake_system`] runs once for each newly added [`JumpBehaviour`]:
//!   controllers without a [`RigidBody`] disable themselves silently, and the
//!   neutral feedback texture is bound.
//! - [`jump_behaviour_system`] runs every frame for enabled controllers:
//!   jump, debug keys, lighting toggles, movement, foot trail, hurt grade,
//!   outline pulse and the win/lose latches, in that order.
//!
//! Scene objects outside the player (screens, celebration particles) are
//! reached through [`SceneHandles`]; a missing one is logged and skipped.
use bevy_ecs::hierarchy::Children;
use bevy_ecs::prelude::*;
use bevy_ecs::query::Has;
use glam::{Vec3, Vec4};
use log::{debug, info, warn};

use crate::components::camera::{Camera, MainCamera};
use crate::components::guipanel::GuiPanel;
use crate::components::jump::JumpBehaviour;
use crate::components::objectname::ObjectName;
use crate::components::particlesystem::ParticleSystem;
use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform3D;
use crate::components::tween::LoopMode;
use crate::events::outcome::{
    GameLostEvent, GameWonEvent, RestartRequestedEvent, narrow_focus, set_panel_enabled,
};
use crate::resources::input::{InputState, KeyCode};
use crate::resources::postprocessing::PostProcessing;
use crate::resources::scenehandles::{SceneHandles, SceneRole};
use crate::resources::scenelighting::SceneLighting;
use crate::resources::texturestore::{FEEDBACK_TEXTURE_UNIT, TextureStore};
use crate::resources::worldtime::WorldTime;
use crate::scene::lookup::{display_name, first_child_in};

pub const BLACK_TEXTURE: &str = "textures/black.png";
pub const DIFFUSE_OFF_TEXTURE: &str = "textures/green.png";
pub const SPECULAR_OFF_TEXTURE: &str = "textures/blue.png";

/// Strength the colour grade drops to on Q.
const REDUCED_COLOR_STRENGTH: f32 = 0.2;

pub fn jump_awake_system(
    mut added: Query<(Entity, &mut JumpBehaviour, Has<RigidBody>), Added<JumpBehaviour>>,
    names: Query<&ObjectName>,
    mut textures: ResMut<TextureStore>,
) {
    for (entity, mut jump, has_body) in added.iter_mut() {
        if !has_body {
            jump.enabled = false;
            debug!(
                "{} has no RigidBody, JumpBehaviour disabled",
                display_name(&names, entity)
            );
        }
        textures.load_and_bind(BLACK_TEXTURE, FEEDBACK_TEXTURE_UNIT);
    }
}

/// Flip a lighting channel, binding `off_texture` when it turns off and the
/// black texture when it turns back on.
fn toggle_feedback_channel(on: &mut bool, off_texture: &str, textures: &mut TextureStore) {
    let path = if *on { off_texture } else { BLACK_TEXTURE };
    textures.load_and_bind(path, FEEDBACK_TEXTURE_UNIT);
    *on = !*on;
}

fn movement_input(input: &InputState, speeds: Vec3) -> Vec3 {
    let mut v = Vec3::ZERO;
    if input.is_down(KeyCode::W) {
        v.x += speeds.x;
    }
    if input.is_down(KeyCode::S) {
        v.x -= speeds.x;
    }
    if input.is_down(KeyCode::A) {
        v.y += speeds.y;
    }
    if input.is_down(KeyCode::D) {
        v.y -= speeds.y;
    }
    v
}

#[allow(clippy::too_many_arguments)]
pub fn jump_behaviour_system(
    time: Res<WorldTime>,
    input: Res<InputState>,
    handles: Res<SceneHandles>,
    mut post: ResMut<PostProcessing>,
    mut lighting: ResMut<SceneLighting>,
    mut textures: ResMut<TextureStore>,
    mut players: Query<(
        Entity,
        &mut JumpBehaviour,
        &mut Transform3D,
        Option<&mut RigidBody>,
        Option<&Children>,
    )>,
    mut panels: Query<&mut GuiPanel>,
    mut particles: Query<&mut ParticleSystem>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
    mut commands: Commands,
) {
    let dt = time.delta;

    for (entity, mut jump, mut transform, body, children) in players.iter_mut() {
        if !jump.enabled {
            continue;
        }

        // Jump
        if input.just_pressed(KeyCode::Space) && jump.is_grounded(transform.position.z) {
            if let Some(mut body) = body {
                body.apply_impulse(Vec3::new(0.0, 0.0, jump.config.impulse));
            }
            if let Some(panel) = jump.panel
                && let Ok(mut panel) = panels.get_mut(panel)
            {
                panel.toggle();
            }
        }

        // Effect and debug keys
        if input.just_pressed(KeyCode::T) {
            jump.color_correct_on = !jump.color_correct_on;
            post.color_correction.enabled = jump.color_correct_on;
        }
        if input.just_pressed(KeyCode::Q) {
            post.color_correction.change_strength(REDUCED_COLOR_STRENGTH);
        }
        if input.just_pressed(KeyCode::Y) {
            narrow_focus(&mut cameras);
        }
        if input.just_pressed(KeyCode::U) {
            jump.win = !jump.win;
        }
        if input.just_pressed(KeyCode::O) {
            commands.trigger(GameWonEvent { player: entity });
        }
        if input.just_pressed(KeyCode::K) {
            commands.trigger(GameLostEvent { player: entity });
        }
        if input.just_pressed(KeyCode::I) {
            match first_child_in(children, &particles, entity, "ParticleSystem") {
                Ok(trail) => {
                    if let Ok(mut trail) = particles.get_mut(trail) {
                        trail.enabled = false;
                    }
                }
                Err(e) => warn!("Cannot disable trail: {}", e),
            }
        }
        if input.just_pressed(KeyCode::L) {
            set_panel_enabled(&handles, &mut panels, SceneRole::WinScreen, true);
        }
        if input.just_pressed(KeyCode::P) && jump.lose {
            commands.trigger(RestartRequestedEvent { player: entity });
        }

        // Lighting channels
        if input.just_pressed(KeyCode::Num1) {
            let ambient = if jump.ambient_on { Vec3::ZERO } else { Vec3::ONE };
            lighting.set_ambient_light(ambient);
            jump.ambient_on = !jump.ambient_on;
        }
        if input.just_pressed(KeyCode::Num2) {
            toggle_feedback_channel(&mut jump.diffuse_on, DIFFUSE_OFF_TEXTURE, &mut textures);
        }
        if input.just_pressed(KeyCode::Num3) {
            toggle_feedback_channel(&mut jump.specular_on, SPECULAR_OFF_TEXTURE, &mut textures);
        }

        // Movement
        let step = movement_input(&input, jump.config.move_speeds) * dt;
        transform.translate(step);

        // Foot trail
        let moving = step != Vec3::ZERO && transform.position.z < jump.config.ground_threshold;
        match first_child_in(children, &particles, entity, "ParticleSystem") {
            Ok(trail) => {
                if let Ok(mut trail) = particles.get_mut(trail)
                    && trail.enabled != moving
                {
                    trail.enabled = moving;
                }
            }
            Err(e) => warn!("Cannot update trail: {}", e),
        }

        // Hurt colour grade
        if jump.is_hurt {
            post.color_correction.change_choice(1.0);
            if jump.hurt_elapsed <= jump.config.hurt_duration {
                jump.hurt_elapsed += dt;
            } else {
                post.color_correction.change_choice(0.0);
                jump.is_hurt = false;
                jump.hurt_elapsed = 0.0;
            }
        }

        // Outline pulse
        let red = jump.pulse.advance(dt, LoopMode::PingPong).value();
        post.outline.color = Vec4::new(red, 0.0, 0.0, 1.0);

        // Latches
        if jump.win {
            set_panel_enabled(&handles, &mut panels, SceneRole::WinScreen, true);
            narrow_focus(&mut cameras);
            match handles.get(SceneRole::CelebrationParticles) {
                Ok(celebration) => {
                    if let Ok(mut ps) = particles.get_mut(celebration)
                        && !ps.enabled
                    {
                        info!("Celebration particles enabled");
                        ps.enabled = true;
                    }
                }
                Err(e) => warn!("Cannot start celebration: {}", e),
            }
        }
        if jump.lose {
            set_panel_enabled(&handles, &mut panels, SceneRole::LoseScreen, true);
            narrow_focus(&mut cameras);
        }
    }
}
