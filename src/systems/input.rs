//! Input systems.
//!
//! - [`apply_input_script`] replays the scripted key timeline into
//!   [`InputState`] at the start of each frame.
//! - [`emit_input_events`] triggers events for global hotkeys (F11 toggles
//!   debug mode via [`SwitchDebugEvent`]).
//! - [`advance_input_state`] settles edge states at the end of the frame so a
//!   press is only seen as `Pressed` once.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputScript, InputState, KeyCode};

/// Feed this frame's scripted transitions into `InputState`.
pub fn apply_input_script(mut input: ResMut<InputState>, script: Option<ResMut<InputScript>>) {
    let Some(mut script) = script else {
        return;
    };
    let frame = script.frame;
    let transitions: Vec<_> = script.take_current().collect();
    for t in transitions {
        debug!("frame {}: {} {}", frame, t.key, if t.pressed { "down" } else { "up" });
        if t.pressed {
            input.press(t.key);
        } else {
            input.release(t.key);
        }
    }
}

pub fn emit_input_events(input: Res<InputState>, mut commands: Commands) {
    if input.just_pressed(KeyCode::F11) {
        commands.trigger(SwitchDebugEvent {});
    }
}

pub fn advance_input_state(mut input: ResMut<InputState>) {
    input.advance_frame();
}
