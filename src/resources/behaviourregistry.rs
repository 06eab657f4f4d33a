//! Registry of persistable behaviours.
//!
//! Maps the type name written in scene documents to functions that capture a
//! behaviour from an entity and rebuild it onto another. Scene capture walks
//! every registered type, and loading looks names up here, so a document
//! naming an unregistered type fails with
//! [`SceneError::UnknownBehaviour`].
//!
//! Applying onto an entity that already carries the behaviour only swaps its
//! config; runtime state such as a self-disabled controller is kept.

use bevy_ecs::prelude::*;
use bevy_ecs::world::EntityWorldMut;
use rustc_hash::FxHashMap;

use crate::components::behaviour::Behaviour;
use crate::components::jump::JumpBehaviour;
use crate::components::patrol::PatrolBehaviour;
use crate::components::triggerresponse::TriggerResponse;
use crate::scene::error::SceneError;

/// Read a behaviour's persisted config off an entity, if it has one.
pub type CaptureFn = fn(&World, Entity) -> Option<serde_json::Value>;
/// Build a behaviour from its persisted config and insert it.
pub type InsertFn = fn(&mut EntityWorldMut<'_>, &serde_json::Value) -> Result<(), SceneError>;
/// Parse a persisted config without touching any entity.
pub type CheckFn = fn(&serde_json::Value) -> Result<(), SceneError>;

#[derive(Clone, Copy)]
pub struct BehaviourEntry {
    pub type_name: &'static str,
    pub capture: CaptureFn,
    pub insert: InsertFn,
    pub check: CheckFn,
    /// Reconfigure the live behaviour if present, insert it otherwise.
    pub apply: InsertFn,
}

impl std::fmt::Debug for BehaviourEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviourEntry")
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[derive(Resource, Clone, Debug, Default)]
pub struct BehaviourRegistry {
    entries: Vec<BehaviourEntry>,
    by_name: FxHashMap<&'static str, usize>,
}

fn capture_behaviour<B: Behaviour>(world: &World, entity: Entity) -> Option<serde_json::Value> {
    world.get::<B>(entity).map(|b| b.to_json())
}

fn insert_behaviour<B: Behaviour>(
    entity: &mut EntityWorldMut<'_>,
    value: &serde_json::Value,
) -> Result<(), SceneError> {
    let behaviour = B::from_json(value)?;
    entity.insert(behaviour);
    Ok(())
}

fn check_behaviour<B: Behaviour>(value: &serde_json::Value) -> Result<(), SceneError> {
    B::from_json(value).map(|_| ())
}

fn apply_behaviour<B: Behaviour>(
    entity: &mut EntityWorldMut<'_>,
    value: &serde_json::Value,
) -> Result<(), SceneError> {
    let fresh = B::from_json(value)?;
    if let Some(mut live) = entity.get_mut::<B>() {
        live.reconfigure(fresh);
    } else {
        entity.insert(fresh);
    }
    Ok(())
}

impl BehaviourRegistry {
    /// Registry with every gameplay behaviour registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register::<JumpBehaviour>();
        registry.register::<PatrolBehaviour>();
        registry.register::<TriggerResponse>();
        registry
    }

    /// Register `B`. Registering the same type twice keeps the first entry.
    pub fn register<B: Behaviour>(&mut self) {
        if self.by_name.contains_key(B::TYPE_NAME) {
            return;
        }
        self.by_name.insert(B::TYPE_NAME, self.entries.len());
        self.entries.push(BehaviourEntry {
            type_name: B::TYPE_NAME,
            capture: capture_behaviour::<B>,
            insert: insert_behaviour::<B>,
            check: check_behaviour::<B>,
            apply: apply_behaviour::<B>,
        });
    }

    pub fn get(&self, type_name: &str) -> Result<&BehaviourEntry, SceneError> {
        self.by_name
            .get(type_name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| SceneError::UnknownBehaviour(type_name.to_string()))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BehaviourEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
