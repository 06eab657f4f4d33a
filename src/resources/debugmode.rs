//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that behaviour inspection
//! should run. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

use crate::components::behaviour::Inspector;

/// Marker resource: when present, the inspector system logs every
/// behaviour's tunables.
#[derive(Resource, Debug, Default)]
pub struct DebugMode {
    /// Inspector reused across frames; queue edits on it to tweak values.
    pub inspector: Inspector,
}
