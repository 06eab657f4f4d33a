//! F11 debug switch.
//!
//! [`SwitchDebugEvent`] is published by
//! [`emit_input_events`](crate::systems::input::emit_input_events) when F11
//! goes down. [`switch_debug_observer`] adds or removes [`DebugMode`]; while
//! it exists,
//! [`debug_inspect_system`](crate::systems::debug::debug_inspect_system)
//! walks every behaviour's inspector each frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    debug_mode: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    match debug_mode {
        Some(mode) => {
            info!(
                "Behaviour inspection off ({} rows last frame)",
                mode.inspector.rows().len()
            );
            commands.remove_resource::<DebugMode>();
        }
        None => {
            info!("Behaviour inspection on");
            commands.insert_resource(DebugMode::default());
        }
    }
}
