//! Behaviour capability shared by the gameplay components.
//!
//! A behaviour is a component that can persist its configuration to a JSON
//! value, be rebuilt from one, and expose its tunable numbers to the debug
//! inspector. Runtime counters and toggles are never persisted.
//!
//! # Related
//!
//! - [`crate::resources::behaviourregistry::BehaviourRegistry`] – type name to
//!   serialize/deserialize functions
//! - [`crate::systems::debug::debug_inspect_system`] – drives [`Inspector`]

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

use crate::scene::error::SceneError;

pub trait Behaviour: Component<Mutability = Mutable> + Sized {
    /// Name written to scene documents.
    const TYPE_NAME: &'static str;

    fn to_json(&self) -> serde_json::Value;

    fn from_json(value: &serde_json::Value) -> Result<Self, SceneError>;

    /// Take the persisted config of `fresh`, keeping this instance's runtime
    /// state (enabled flag, latches, counters, weak references).
    fn reconfigure(&mut self, fresh: Self);

    /// Report tunables to the inspector. Edits queued on the inspector are
    /// applied in place.
    fn inspect(&mut self, inspector: &mut Inspector);
}

/// A labelled value reported by a behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorRow {
    pub owner: String,
    pub label: String,
    pub value: f32,
}

/// Collects labelled floats from behaviours and applies queued edits.
///
/// Edits are keyed by `"Owner/Label"` and consumed when the matching field is
/// next inspected.
#[derive(Debug, Default)]
pub struct Inspector {
    owner: String,
    rows: Vec<InspectorRow>,
    edits: FxHashMap<String, f32>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the object name used to key the following rows.
    pub fn begin(&mut self, owner: &str) {
        self.owner.clear();
        self.owner.push_str(owner);
    }

    pub fn queue_edit(&mut self, owner: &str, label: &str, value: f32) {
        self.edits.insert(format!("{owner}/{label}"), value);
    }

    /// Record `value` under `label`, applying a pending edit first.
    /// Returns true if the value changed.
    pub fn drag_float(&mut self, label: &str, value: &mut f32) -> bool {
        let key = format!("{}/{}", self.owner, label);
        let changed = match self.edits.remove(&key) {
            Some(v) => {
                *value = v;
                true
            }
            None => false,
        };
        self.rows.push(InspectorRow {
            owner: self.owner.clone(),
            label: label.to_string(),
            value: *value,
        });
        changed
    }

    /// Same as [`drag_float`](Self::drag_float) for each component of a vector,
    /// labelled `label.x`, `label.y`, `label.z`.
    pub fn drag_vec3(&mut self, label: &str, value: &mut glam::Vec3) -> bool {
        let x = self.drag_float(&format!("{label}.x"), &mut value.x);
        let y = self.drag_float(&format!("{label}.y"), &mut value.y);
        let z = self.drag_float(&format!("{label}.z"), &mut value.z);
        x || y || z
    }

    pub fn rows(&self) -> &[InspectorRow] {
        &self.rows
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }
}
