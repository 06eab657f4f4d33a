//! Gameplay integration tests: player controller, trigger response and the
//! outcome events, driven through the full frame schedule.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;

use jumpstage::components::camera::{Camera, NARROW_FOCAL_DEPTH};
use jumpstage::components::guipanel::GuiPanel;
use jumpstage::components::jump::JumpBehaviour;
use jumpstage::components::objectname::ObjectName;
use jumpstage::components::particlesystem::{ParticleSystem, SphereEmitter};
use jumpstage::components::rigidbody::RigidBody;
use jumpstage::components::transform::Transform3D;
use jumpstage::components::triggerresponse::{TriggerResponse, overlap_predicate};
use jumpstage::events::outcome::{GameLostEvent, GameWonEvent, PlayerHurtEvent};
use jumpstage::events::trigger::TriggerEnterEvent;
use jumpstage::game::{build_update_schedule, init_world, register_observers, run_frame};
use jumpstage::resources::gameconfig::GameConfig;
use jumpstage::resources::debugmode::DebugMode;
use jumpstage::resources::input::{InputScript, InputState, KeyCode};
use jumpstage::resources::postprocessing::PostProcessing;
use jumpstage::resources::scenehandles::{SceneHandles, SceneRole};
use jumpstage::resources::scenelighting::SceneLighting;
use jumpstage::resources::texturestore::{FEEDBACK_TEXTURE_UNIT, TextureStore};
use jumpstage::scene::builder::build_demo_scene;
use jumpstage::systems::jump::{BLACK_TEXTURE, DIFFUSE_OFF_TEXTURE};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct Outcomes {
    won: u32,
    lost: u32,
}

fn count_won(_trigger: On<GameWonEvent>, mut outcomes: ResMut<Outcomes>) {
    outcomes.won += 1;
}

fn count_lost(_trigger: On<GameLostEvent>, mut outcomes: ResMut<Outcomes>) {
    outcomes.lost += 1;
}

fn make_world() -> World {
    let mut world = init_world(&GameConfig::new());
    register_observers(&mut world);
    world.init_resource::<Outcomes>();
    world.add_observer(count_won);
    world.add_observer(count_lost);
    world.flush();
    world
}

fn spawn_player(world: &mut World, z: f32) -> Entity {
    world
        .spawn((
            ObjectName::new("Main Character"),
            Transform3D::from_position(Vec3::new(0.0, 0.0, z)),
            RigidBody::dynamic(),
            JumpBehaviour::default(),
            TriggerResponse::default(),
        ))
        .id()
}

fn tap(world: &mut World, schedule: &mut Schedule, key: KeyCode, dt: f32) {
    world.resource_mut::<InputState>().press(key);
    run_frame(world, schedule, dt);
    world.resource_mut::<InputState>().release(key);
    run_frame(world, schedule, dt);
}

#[test]
fn test_jump_requires_fresh_press_and_ground() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    world.resource_mut::<InputState>().press(KeyCode::Space);
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.z, 6.0));
    assert!(approx_eq(world.get::<Transform3D>(player).unwrap().position.z, 1.1));

    // Held, not re-pressed: no second impulse.
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.z, 6.0));

    // Re-pressed but airborne: still no impulse.
    world.resource_mut::<InputState>().release(KeyCode::Space);
    run_frame(&mut world, &mut schedule, 0.1);
    world.resource_mut::<InputState>().press(KeyCode::Space);
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.z, 6.0));
}

#[test]
fn test_controller_without_body_disables_itself() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = world
        .spawn((Transform3D::default(), JumpBehaviour::default()))
        .id();

    world.resource_mut::<InputState>().press(KeyCode::W);
    run_frame(&mut world, &mut schedule, 0.5);

    assert!(!world.get::<JumpBehaviour>(player).unwrap().enabled);
    assert_eq!(world.get::<Transform3D>(player).unwrap().position, Vec3::ZERO);
    assert_eq!(
        world.resource::<TextureStore>().bound_path(FEEDBACK_TEXTURE_UNIT),
        Some(BLACK_TEXTURE)
    );
}

#[test]
fn test_movement_keys_translate_player() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    world.resource_mut::<InputState>().press(KeyCode::W);
    world.resource_mut::<InputState>().press(KeyCode::D);
    run_frame(&mut world, &mut schedule, 0.5);

    let pos = world.get::<Transform3D>(player).unwrap().position;
    assert!(approx_eq(pos.x, 1.0));
    assert!(approx_eq(pos.y, -1.0));
}

#[test]
fn test_lighting_toggles_are_involutions() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    let mut seen = Vec::new();
    for _ in 0..4 {
        tap(&mut world, &mut schedule, KeyCode::Num2, 0.1);
        seen.push(world.get::<JumpBehaviour>(player).unwrap().diffuse_on);
    }
    assert_eq!(seen, vec![false, true, false, true]);
    assert_eq!(
        world.resource::<TextureStore>().bound_path(FEEDBACK_TEXTURE_UNIT),
        Some(BLACK_TEXTURE)
    );

    tap(&mut world, &mut schedule, KeyCode::Num2, 0.1);
    assert_eq!(
        world.resource::<TextureStore>().bound_path(FEEDBACK_TEXTURE_UNIT),
        Some(DIFFUSE_OFF_TEXTURE)
    );

    for _ in 0..4 {
        tap(&mut world, &mut schedule, KeyCode::Num1, 0.1);
    }
    assert!(world.get::<JumpBehaviour>(player).unwrap().ambient_on);
    assert_eq!(world.resource::<SceneLighting>().ambient, Vec3::ONE);
}

#[test]
fn test_hurt_grade_runs_for_its_duration() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    world.trigger(PlayerHurtEvent { player });
    world.flush();
    assert!(world.get::<JumpBehaviour>(player).unwrap().is_hurt);

    run_frame(&mut world, &mut schedule, 0.25);
    assert_eq!(world.resource::<PostProcessing>().color_correction.choice, 1.0);
    run_frame(&mut world, &mut schedule, 0.25);
    assert_eq!(world.resource::<PostProcessing>().color_correction.choice, 1.0);
    run_frame(&mut world, &mut schedule, 0.25);
    assert_eq!(world.resource::<PostProcessing>().color_correction.choice, 0.0);

    let jump = world.get::<JumpBehaviour>(player).unwrap();
    assert!(!jump.is_hurt);
    assert_eq!(jump.hurt_elapsed, 0.0);
}

fn hit(world: &mut World, player: Entity, enemy: Entity) {
    world.trigger(TriggerEnterEvent {
        volume: player,
        other: enemy,
    });
    world.flush();
}

#[test]
fn test_lose_latches_exactly_once() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 0.5);
    let enemy = world
        .spawn((
            ObjectName::new("Enemy"),
            Transform3D::from_position(Vec3::new(0.0, 10.0, 1.0)),
        ))
        .id();
    world.spawn((ObjectName::new("Projectile"), Transform3D::default()));

    for _ in 0..3 {
        world.get_mut::<Transform3D>(player).unwrap().position = Vec3::new(4.0, 4.0, 2.0);
        hit(&mut world, player, enemy);
        assert_eq!(
            world.get::<Transform3D>(player).unwrap().position,
            Vec3::new(0.0, 0.0, 0.5)
        );
    }
    assert_eq!(world.get::<TriggerResponse>(player).unwrap().lives, 0);
    assert_eq!(world.resource::<Outcomes>().lost, 1);
    assert!(world.get::<JumpBehaviour>(player).unwrap().lose);

    hit(&mut world, player, enemy);
    hit(&mut world, player, enemy);
    assert_eq!(world.get::<TriggerResponse>(player).unwrap().lives, -2);
    assert_eq!(world.resource::<Outcomes>().lost, 1);
    assert_eq!(world.resource::<Outcomes>().won, 0);
}

#[test]
fn test_restart_refills_lives_after_loss() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);
    {
        let mut response = world.get_mut::<TriggerResponse>(player).unwrap();
        response.lives = 0;
    }

    // P does nothing before the game is lost.
    tap(&mut world, &mut schedule, KeyCode::P, 0.1);
    assert_eq!(world.get::<TriggerResponse>(player).unwrap().lives, 0);

    world.get_mut::<JumpBehaviour>(player).unwrap().lose = true;
    tap(&mut world, &mut schedule, KeyCode::P, 0.1);
    assert_eq!(world.get::<TriggerResponse>(player).unwrap().lives, 3);
}

#[test]
fn test_overlap_band_wins_on_enter() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 0.5);
    world.spawn((
        ObjectName::new("Enemy"),
        Transform3D::from_position(Vec3::new(0.0, 5.0, 1.0)),
    ));
    world.spawn((
        ObjectName::new("Projectile"),
        Transform3D::from_position(Vec3::new(0.0, 4.7, 1.0)),
    ));
    let wall = world.spawn(ObjectName::new("Wall")).id();

    hit(&mut world, player, wall);
    assert_eq!(world.resource::<Outcomes>().won, 1);
    assert!(world.get::<JumpBehaviour>(player).unwrap().win);
    assert!(world.get::<TriggerResponse>(player).unwrap().player_in_trigger);
    assert_eq!(world.get::<TriggerResponse>(player).unwrap().lives, 3);
}

#[test]
fn test_overlap_band_bounds() {
    assert!(overlap_predicate(5.0, 4.7, 0.4));
    assert!(!overlap_predicate(5.0, 4.5, 0.4));
    // Lower edge inclusive, upper edge exclusive.
    assert!(overlap_predicate(4.0, 4.5, 0.5));
    assert!(!overlap_predicate(5.0, 4.5, 0.5));
}

#[test]
fn test_missing_win_check_objects_are_skipped() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 0.5);
    let other = world.spawn(ObjectName::new("Crate")).id();
    hit(&mut world, player, other);
    assert_eq!(world.resource::<Outcomes>().won, 0);
    assert!(world.get::<TriggerResponse>(player).unwrap().player_in_trigger);
}

#[test]
fn test_win_key_shows_screen_in_demo_scene() {
    let mut config = GameConfig::new();
    config.seed = Some(1);
    config.light_count = 0;
    let mut world = make_world();
    let handles = build_demo_scene(&mut world, &config);
    let mut schedule = build_update_schedule();

    run_frame(&mut world, &mut schedule, config.delta);
    tap(&mut world, &mut schedule, KeyCode::O, config.delta);

    let win_screen = handles.get(SceneRole::WinScreen).unwrap();
    let celebration = handles.get(SceneRole::CelebrationParticles).unwrap();
    let camera = handles.get(SceneRole::MainCamera).unwrap();
    assert!(world.get::<GuiPanel>(win_screen).unwrap().enabled);
    assert!(world.get::<ParticleSystem>(celebration).unwrap().enabled);
    assert_eq!(world.get::<Camera>(camera).unwrap().focal_depth, NARROW_FOCAL_DEPTH);
    assert_eq!(world.resource::<Outcomes>().won, 1);

    let lose_screen = handles.get(SceneRole::LoseScreen).unwrap();
    assert!(!world.get::<GuiPanel>(lose_screen).unwrap().enabled);
}

#[test]
fn test_trail_follows_movement_in_demo_scene() {
    let mut config = GameConfig::new();
    config.seed = Some(2);
    config.light_count = 0;
    let mut world = make_world();
    let handles = build_demo_scene(&mut world, &config);
    let mut schedule = build_update_schedule();
    let player = handles.get(SceneRole::Player).unwrap();

    // Let the player settle on the ground first.
    for _ in 0..30 {
        run_frame(&mut world, &mut schedule, config.delta);
    }
    let trail = world
        .get::<Children>(player)
        .and_then(|c| c.first().copied())
        .unwrap();
    assert!(!world.get::<ParticleSystem>(trail).unwrap().enabled);

    world.resource_mut::<InputState>().press(KeyCode::W);
    run_frame(&mut world, &mut schedule, config.delta);
    assert!(world.get::<ParticleSystem>(trail).unwrap().enabled);

    world.resource_mut::<InputState>().release(KeyCode::W);
    run_frame(&mut world, &mut schedule, config.delta);
    assert!(!world.get::<ParticleSystem>(trail).unwrap().enabled);
}

#[test]
fn test_input_script_drives_jump() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);
    let script = InputScript::parse("# jump on the first frame\n0 space down\n1 space up\n");
    world.insert_resource(script.unwrap());

    run_frame(&mut world, &mut schedule, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.z, 6.0));
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(!world.resource::<InputState>().is_down(KeyCode::Space));
}

#[test]
fn test_f11_inspection_applies_queued_edit() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    tap(&mut world, &mut schedule, KeyCode::F11, 0.1);
    assert!(world.contains_resource::<DebugMode>());

    world
        .resource_mut::<DebugMode>()
        .inspector
        .queue_edit("Main Character", "Impulse", 9.0);
    run_frame(&mut world, &mut schedule, 0.1);
    assert_eq!(world.get::<JumpBehaviour>(player).unwrap().config.impulse, 9.0);
    assert!(
        world
            .resource::<DebugMode>()
            .inspector
            .rows()
            .iter()
            .any(|row| row.owner == "Main Character" && row.label == "Lives")
    );

    tap(&mut world, &mut schedule, KeyCode::F11, 0.1);
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn test_jump_toggles_bound_panel_until_it_is_gone() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let panel = world.spawn(GuiPanel::default()).id();
    let player = world
        .spawn((
            Transform3D::from_position(Vec3::new(0.0, 0.0, 0.5)),
            RigidBody::dynamic(),
            JumpBehaviour::default().with_panel(panel),
        ))
        .id();

    tap(&mut world, &mut schedule, KeyCode::Space, 0.1);
    assert!(!world.get::<GuiPanel>(panel).unwrap().enabled);

    world.despawn(panel);
    world.get_mut::<Transform3D>(player).unwrap().position.z = 0.5;
    tap(&mut world, &mut schedule, KeyCode::Space, 0.1);
    assert_eq!(world.get::<JumpBehaviour>(player).unwrap().panel, Some(panel));
}

fn demo_world(seed: u64) -> (World, SceneHandles) {
    let mut config = GameConfig::new();
    config.seed = Some(seed);
    config.light_count = 0;
    let mut world = make_world();
    let handles = build_demo_scene(&mut world, &config);
    (world, handles)
}

#[test]
fn test_outline_pulse_is_a_triangle_wave() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);

    let mut reds = Vec::new();
    for frame in 0..8 {
        // The pulse keeps running whatever else the controller is doing.
        if frame == 4 {
            let mut jump = world.get_mut::<JumpBehaviour>(player).unwrap();
            jump.is_hurt = true;
            jump.lose = true;
        }
        run_frame(&mut world, &mut schedule, 0.5);
        reds.push(world.resource::<PostProcessing>().outline.color.x);
    }
    let expected = [0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25, 0.0];
    for (red, want) in reds.iter().zip(expected) {
        assert!(approx_eq(*red, want), "got {:?}", reds);
    }
}

#[test]
fn test_colour_correction_keys() {
    let (mut world, handles) = demo_world(3);
    let mut schedule = build_update_schedule();
    let player = handles.get(SceneRole::Player).unwrap();

    tap(&mut world, &mut schedule, KeyCode::T, 0.1);
    assert!(!world.resource::<PostProcessing>().color_correction.enabled);
    assert!(!world.get::<JumpBehaviour>(player).unwrap().color_correct_on);
    tap(&mut world, &mut schedule, KeyCode::T, 0.1);
    assert!(world.resource::<PostProcessing>().color_correction.enabled);

    assert_eq!(world.resource::<PostProcessing>().color_correction.strength, 1.0);
    tap(&mut world, &mut schedule, KeyCode::Q, 0.1);
    assert_eq!(world.resource::<PostProcessing>().color_correction.strength, 0.2);
}

#[test]
fn test_focus_key_narrows_main_camera() {
    let (mut world, handles) = demo_world(4);
    let mut schedule = build_update_schedule();
    let camera = handles.get(SceneRole::MainCamera).unwrap();
    world.get_mut::<Camera>(camera).unwrap().focal_depth = 5.0;

    run_frame(&mut world, &mut schedule, 0.1);
    assert_eq!(world.get::<Camera>(camera).unwrap().focal_depth, 5.0);
    tap(&mut world, &mut schedule, KeyCode::Y, 0.1);
    assert_eq!(world.get::<Camera>(camera).unwrap().focal_depth, NARROW_FOCAL_DEPTH);
}

#[test]
fn test_win_toggle_key() {
    let (mut world, handles) = demo_world(5);
    let mut schedule = build_update_schedule();
    let player = handles.get(SceneRole::Player).unwrap();
    let win_screen = handles.get(SceneRole::WinScreen).unwrap();
    let celebration = handles.get(SceneRole::CelebrationParticles).unwrap();

    tap(&mut world, &mut schedule, KeyCode::U, 0.1);
    assert!(world.get::<JumpBehaviour>(player).unwrap().win);
    assert!(world.get::<GuiPanel>(win_screen).unwrap().enabled);
    assert!(world.get::<ParticleSystem>(celebration).unwrap().enabled);
    // U flips the flag directly, without publishing a win.
    assert_eq!(world.resource::<Outcomes>().won, 0);

    tap(&mut world, &mut schedule, KeyCode::U, 0.1);
    assert!(!world.get::<JumpBehaviour>(player).unwrap().win);
}

#[test]
fn test_reveal_key_shows_win_screen_only() {
    let (mut world, handles) = demo_world(6);
    let mut schedule = build_update_schedule();
    let player = handles.get(SceneRole::Player).unwrap();
    let win_screen = handles.get(SceneRole::WinScreen).unwrap();
    let celebration = handles.get(SceneRole::CelebrationParticles).unwrap();

    run_frame(&mut world, &mut schedule, 0.1);
    assert!(!world.get::<GuiPanel>(win_screen).unwrap().enabled);
    tap(&mut world, &mut schedule, KeyCode::L, 0.1);
    assert!(world.get::<GuiPanel>(win_screen).unwrap().enabled);
    assert!(!world.get::<JumpBehaviour>(player).unwrap().win);
    assert!(!world.get::<ParticleSystem>(celebration).unwrap().enabled);
}

#[test]
fn test_trail_off_key_disables_idle_trail() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let player = spawn_player(&mut world, 0.5);
    let trail = world
        .spawn((ParticleSystem::new(SphereEmitter::default()), ChildOf(player)))
        .id();

    world.resource_mut::<InputState>().press(KeyCode::I);
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(!world.get::<ParticleSystem>(trail).unwrap().enabled);
}

#[test]
fn test_lose_key_latches_and_reasserts_screen() {
    let (mut world, handles) = demo_world(7);
    let mut schedule = build_update_schedule();
    let player = handles.get(SceneRole::Player).unwrap();
    let lose_screen = handles.get(SceneRole::LoseScreen).unwrap();
    let camera = handles.get(SceneRole::MainCamera).unwrap();

    tap(&mut world, &mut schedule, KeyCode::K, 0.1);
    assert!(world.get::<JumpBehaviour>(player).unwrap().lose);
    assert!(world.get::<GuiPanel>(lose_screen).unwrap().enabled);
    assert_eq!(world.resource::<Outcomes>().lost, 1);

    // Something else hides the screen and widens focus; the latch wins.
    world.get_mut::<GuiPanel>(lose_screen).unwrap().enabled = false;
    world.get_mut::<Camera>(camera).unwrap().focal_depth = 5.0;
    run_frame(&mut world, &mut schedule, 0.1);
    assert!(world.get::<GuiPanel>(lose_screen).unwrap().enabled);
    assert_eq!(world.get::<Camera>(camera).unwrap().focal_depth, NARROW_FOCAL_DEPTH);
    assert_eq!(world.resource::<Outcomes>().lost, 1);
}
