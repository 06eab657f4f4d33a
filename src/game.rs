//! World setup and the per-frame update.
//!
//! [`init_world`] inserts every resource the gameplay systems read,
//! [`register_observers`] wires the event observers, and
//! [`build_update_schedule`] orders the systems for one frame:
//!
//! 1. scripted input and input events
//! 2. player controller (awake, then behaviour)
//! 3. patrols, then orbit movers
//! 4. physics integration
//! 5. trigger detection (observers apply hurt/win/lose)
//! 6. particles, behaviour inspection
//! 7. input edge advance
//!
//! [`run_frame`] advances time, runs the schedule and clears change trackers,
//! the same sequence the binary's loop performs.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::events::outcome::{on_game_lost, on_game_won, on_player_hurt, on_restart_requested};
use crate::events::switchdebug::switch_debug_observer;
use crate::events::trigger::{on_trigger_enter, on_trigger_leave};
use crate::resources::behaviourregistry::BehaviourRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::physicssettings::PhysicsSettings;
use crate::resources::postprocessing::PostProcessing;
use crate::resources::scenehandles::SceneHandles;
use crate::resources::scenelighting::SceneLighting;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::debug::debug_inspect_system;
use crate::systems::input::{advance_input_state, apply_input_script, emit_input_events};
use crate::systems::jump::{jump_awake_system, jump_behaviour_system};
use crate::systems::orbit::orbit_mover_system;
use crate::systems::particles::particle_system_tick;
use crate::systems::patrol::patrol_system;
use crate::systems::physics::physics_step;
use crate::systems::time::update_world_time;
use crate::systems::trigger::trigger_volume_system;

/// Fresh world with every gameplay resource inserted.
pub fn init_world(config: &GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(InputState::default());
    world.insert_resource(PostProcessing::default());
    world.insert_resource(SceneLighting::default());
    world.insert_resource(TextureStore::default());
    world.insert_resource(PhysicsSettings::default());
    world.insert_resource(SceneHandles::default());
    world.insert_resource(BehaviourRegistry::with_defaults());
    world.insert_resource(config.clone());
    world
}

pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(on_trigger_enter));
    world.spawn(Observer::new(on_trigger_leave));
    world.spawn(Observer::new(on_player_hurt));
    world.spawn(Observer::new(on_game_won));
    world.spawn(Observer::new(on_game_lost));
    world.spawn(Observer::new(on_restart_requested));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers an event.
    world.flush();
}

pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            apply_input_script,
            emit_input_events,
            jump_awake_system,
            jump_behaviour_system,
            patrol_system,
            orbit_mover_system,
            physics_step,
            trigger_volume_system,
            particle_system_tick,
            debug_inspect_system,
            advance_input_state,
        )
            .chain(),
    );
    update
}

/// Advance time by `dt` (unscaled) and run one frame.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
