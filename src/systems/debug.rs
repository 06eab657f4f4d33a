//! Behaviour inspection.
//!
//! While [`DebugMode`] is present, every behaviour reports its tunables to the
//! shared [`Inspector`](crate::components::behaviour::Inspector) and the
//! collected rows are logged at `debug` level. Edits queued on the inspector
//! are applied as the matching fields are visited.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::behaviour::{Behaviour, Inspector};
use crate::components::jump::JumpBehaviour;
use crate::components::objectname::ObjectName;
use crate::components::patrol::PatrolBehaviour;
use crate::components::triggerresponse::TriggerResponse;
use crate::resources::debugmode::DebugMode;
use crate::scene::lookup::display_name;

fn inspect_all<B: Behaviour>(
    query: &mut Query<(Entity, &mut B)>,
    names: &Query<&ObjectName>,
    inspector: &mut Inspector,
) {
    for (entity, mut behaviour) in query.iter_mut() {
        inspector.begin(&display_name(names, entity));
        behaviour.inspect(inspector);
    }
}

pub fn debug_inspect_system(
    debug_mode: Option<ResMut<DebugMode>>,
    mut jumps: Query<(Entity, &mut JumpBehaviour)>,
    mut patrols: Query<(Entity, &mut PatrolBehaviour)>,
    mut triggers: Query<(Entity, &mut TriggerResponse)>,
    names: Query<&ObjectName>,
) {
    let Some(mut debug_mode) = debug_mode else {
        return;
    };
    let inspector = &mut debug_mode.inspector;
    inspector.clear_rows();

    inspect_all(&mut jumps, &names, inspector);
    inspect_all(&mut patrols, &names, inspector);
    inspect_all(&mut triggers, &names, inspector);

    for row in inspector.rows() {
        debug!("[inspect] {} {} = {}", row.owner, row.label, row.value);
    }
}
