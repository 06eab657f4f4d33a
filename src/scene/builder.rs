//! Demo scene construction.
//!
//! Builds the playable scene: a lit ground plane with two walls, the player
//! with its trail particles, an orbiting enemy, a coin with a celebration
//! effect, win/lose screens and a UI canvas. The objects gameplay needs to
//! reach afterwards are recorded in [`SceneHandles`].
//!
//! Layout of the "Demo Parent" subtree:
//!
//! ```text
//! Demo Parent
//! ├── Main Character ── Particles
//! ├── Enemy
//! ├── Coin ── Celebration Particles
//! ├── Trigger
//! ├── Win Screen
//! └── Lose Screen
//! ```
use bevy_ecs::prelude::*;
use fastrand::Rng;
use glam::{Vec2, Vec3, Vec4};
use log::info;

use crate::components::camera::{Camera, MainCamera};
use crate::components::collider::{BoxCollider3D, TriggerVolume};
use crate::components::guipanel::{GuiPanel, RectTransform};
use crate::components::jump::{JumpBehaviour, JumpConfig};
use crate::components::light::{Light, RenderComponent};
use crate::components::objectname::ObjectName;
use crate::components::orbitmover::OrbitMover;
use crate::components::particlesystem::{ParticleSystem, SphereEmitter};
use crate::components::patrol::PatrolBehaviour;
use crate::components::rigidbody::{RigidBody, RigidBodyType};
use crate::components::transform::Transform3D;
use crate::components::triggerresponse::{TriggerConfig, TriggerResponse};
use crate::resources::gameconfig::GameConfig;
use crate::resources::physicssettings::PhysicsSettings;
use crate::resources::scenehandles::{SceneHandles, SceneRole};

const LIGHT_SPREAD: f32 = 25.0;

fn random_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Uniform random point on a disk of `radius`.
fn disk_rand(rng: &mut Rng, radius: f32) -> Vec2 {
    let r = radius * rng.f32().sqrt();
    let theta = rng.f32() * std::f32::consts::TAU;
    Vec2::new(r * theta.cos(), r * theta.sin())
}

fn dynamic_body(settings: &PhysicsSettings) -> RigidBody {
    let mut body = RigidBody::dynamic();
    body.add_force("gravity", Vec3::new(0.0, 0.0, settings.gravity));
    body
}

fn spawn_lights(world: &mut World, rng: &mut Rng, count: u32) {
    let parent = world.spawn((ObjectName::new("Lights"), Transform3D::default())).id();
    for _ in 0..count {
        let pos = disk_rand(rng, LIGHT_SPREAD);
        world.spawn((
            ObjectName::new("Light"),
            Transform3D::from_position(Vec3::new(pos.x, pos.y, 1.0)),
            Light {
                color: Vec3::new(rng.f32(), rng.f32(), rng.f32()),
                radius: random_range(rng, 0.1, 10.0),
                intensity: 1.0,
            },
            ChildOf(parent),
        ));
    }
}

fn screen_panel(texture: &str) -> (RectTransform, GuiPanel) {
    (
        RectTransform::new(
            Vec2::new(200.0, 148.0),
            Vec2::new(1200.0, 652.0),
            Vec2::new(700.0, 400.0),
        ),
        GuiPanel::new(Vec4::ONE).with_texture(texture).hidden(),
    )
}

/// Spawn the demo scene into `world` and insert its [`SceneHandles`].
pub fn build_demo_scene(world: &mut World, config: &GameConfig) -> SceneHandles {
    let settings = world
        .get_resource::<PhysicsSettings>()
        .copied()
        .unwrap_or_default();
    let mut rng = match config.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut handles = SceneHandles::default();

    spawn_lights(world, &mut rng, config.light_count);

    // Camera
    let mut camera_transform = Transform3D::from_position(Vec3::new(-3.0, -1.0, 5.0));
    camera_transform.look_at(Vec3::ZERO);
    let camera = world
        .spawn((
            ObjectName::new("Main Camera"),
            camera_transform,
            Camera::default(),
            MainCamera,
        ))
        .id();
    handles.set(SceneRole::MainCamera, camera);

    // Ground and walls
    let plane = world
        .spawn((
            ObjectName::new("Plane"),
            Transform3D::default(),
            RenderComponent::new("tiled_plane", "box"),
            RigidBody::new(RigidBodyType::Static),
            BoxCollider3D::new(Vec3::new(50.0, 50.0, 1.0)).with_offset(Vec3::new(0.0, 0.0, -1.0)),
        ))
        .id();
    for (name, y) in [("Wall1", 10.0), ("Wall2", -10.0)] {
        world.spawn((
            ObjectName::new(name),
            Transform3D::from_position(Vec3::new(0.0, y, 1.5)).with_scale(Vec3::new(20.0, 1.0, 3.0)),
            RenderComponent::new("cube", "white_brick"),
            ChildOf(plane),
        ));
    }

    let projectile = world
        .spawn((
            ObjectName::new("Projectile"),
            Transform3D::from_position(Vec3::new(-6.0, -4.0, 1.0)),
            RenderComponent::new("sword", "sword"),
        ))
        .id();
    handles.set(SceneRole::Projectile, projectile);

    world.spawn((
        ObjectName::new("EnemyProjectile"),
        Transform3D::from_position(Vec3::new(-6.0, -4.0, 1.0)),
        RenderComponent::new("cube", "box"),
        PatrolBehaviour::one_shot(Vec3::new(3.0, 3.0, 0.0), Vec3::new(6.0, -6.0, 3.0), 4.0),
    ));

    let demo = world
        .spawn((ObjectName::new("Demo Parent"), Transform3D::default()))
        .id();

    // Player
    let jump_config = JumpConfig {
        impulse: config.impulse,
        move_speeds: Vec3::new(config.move_speed, config.move_speed, 1.0),
        ground_threshold: config.ground_threshold,
        ..JumpConfig::default()
    };
    let trigger_config = TriggerConfig {
        starting_lives: config.lives,
        ..TriggerConfig::default()
    };
    let player = world
        .spawn((
            ObjectName::new("Main Character"),
            Transform3D::from_position(Vec3::new(0.0, 0.0, 1.0)).with_scale(Vec3::splat(0.5)),
            RenderComponent::new("link", "link"),
            dynamic_body(&settings),
            JumpBehaviour::new(jump_config),
            BoxCollider3D::new(Vec3::splat(1.0)),
            TriggerVolume::default(),
            TriggerResponse::new(trigger_config),
            ChildOf(demo),
        ))
        .id();
    handles.set(SceneRole::Player, player);
    world.spawn((
        ObjectName::new("Particles"),
        Transform3D::default(),
        ParticleSystem::new(SphereEmitter {
            interval: 1.0 / 50.0,
            velocity: Vec3::splat(0.5),
            radius: 0.5,
            life_range: Vec2::new(1.0, 3.0),
            size_range: Vec2::new(0.5, 1.0),
            color: Vec4::new(0.5, 0.5, 0.5, 1.0),
            tex_id: 3,
        }),
        ChildOf(player),
    ));

    // Enemy
    let enemy = world
        .spawn((
            ObjectName::new("Enemy"),
            Transform3D::from_position(Vec3::new(0.0, -6.0, 1.0)).with_scale(Vec3::splat(0.5)),
            RenderComponent::new("knight", "knight"),
            RigidBody::new(RigidBodyType::Kinematic),
            BoxCollider3D::new(Vec3::splat(0.5)),
            PatrolBehaviour::bobbing(0.0, 3.0, 4.0),
            OrbitMover::new(Vec3::new(0.0, 0.0, 2.0), 10.0, 6.0),
            ChildOf(demo),
        ))
        .id();
    handles.set(SceneRole::Enemy, enemy);

    // Coin
    let coin = world
        .spawn((
            ObjectName::new("Coin"),
            Transform3D::from_position(Vec3::new(8.0, 8.0, 1.0)),
            RenderComponent::new("cube", "white_brick"),
            dynamic_body(&settings),
            BoxCollider3D::new(Vec3::splat(0.5)),
            ChildOf(demo),
        ))
        .id();
    handles.set(SceneRole::Coin, coin);
    let celebration = world
        .spawn((
            ObjectName::new("Celebration Particles"),
            Transform3D::default(),
            ParticleSystem::new(SphereEmitter {
                interval: 1.0 / 50.0,
                velocity: Vec3::splat(3.24),
                radius: 1.0,
                life_range: Vec2::new(1.0, 3.0),
                size_range: Vec2::new(0.5, 1.0),
                color: Vec4::new(1.0, 0.0, 0.0, 1.0),
                tex_id: 2,
            })
            .disabled(),
            ChildOf(coin),
        ))
        .id();
    handles.set(SceneRole::CelebrationParticles, celebration);

    world.spawn((ObjectName::new("Trigger"), Transform3D::default(), ChildOf(demo)));

    // Screens
    let win_screen = world
        .spawn((
            ObjectName::new("Win Screen"),
            Transform3D::default(),
            screen_panel("textures/WinScreen.png"),
            ChildOf(demo),
        ))
        .id();
    handles.set(SceneRole::WinScreen, win_screen);
    let lose_screen = world
        .spawn((
            ObjectName::new("Lose Screen"),
            Transform3D::default(),
            screen_panel("textures/LoseScreen.png"),
            ChildOf(demo),
        ))
        .id();
    handles.set(SceneRole::LoseScreen, lose_screen);

    // Shadow caster
    let mut shadow_transform = Transform3D::from_position(Vec3::new(3.0, 3.0, 12.5));
    shadow_transform.look_at(Vec3::ZERO);
    world.spawn((ObjectName::new("Shadow Light"), shadow_transform, Light::default()));

    // UI
    let canvas = world
        .spawn((
            ObjectName::new("UI Canvas"),
            Transform3D::default(),
            RectTransform::new(Vec2::new(16.0, 16.0), Vec2::new(128.0, 128.0), Vec2::ZERO),
            GuiPanel::default(),
        ))
        .id();
    handles.set(SceneRole::Canvas, canvas);
    world.spawn((ObjectName::new("Sub Item"), Transform3D::default(), ChildOf(canvas)));

    world.flush();
    info!(
        "Demo scene built: {} lights, player {:?}",
        config.light_count, player
    );
    world.insert_resource(handles.clone());
    handles
}
