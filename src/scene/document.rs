//! Scene documents: the persisted form of a scene.
//!
//! A [`SceneDocument`] stores every named object with its transform, its
//! parent (as an index into the object list, parents always first) and the
//! configuration of each registered behaviour it carries. Runtime state is
//! not persisted; behaviours come back freshly initialised from their config.
//!
//! ```json
//! {
//!   "name": "demo",
//!   "objects": [
//!     { "name": "Demo Parent", "parent": null, "transform": { ... }, "behaviours": {} },
//!     { "name": "Enemy", "parent": 0, "transform": { ... },
//!       "behaviours": { "PatrolBehaviour": { ... } } }
//!   ]
//! }
//! ```
//!
//! # Related
//! - [`crate::resources::behaviourregistry::BehaviourRegistry`] – type name lookup
//! - [`crate::components::behaviour::Behaviour`] – per-type config (de)serialisation
use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use bevy_ecs::world::EntityWorldMut;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::objectname::ObjectName;
use crate::components::transform::Transform3D;
use crate::resources::behaviourregistry::BehaviourRegistry;
use crate::scene::error::{LookupError, SceneError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub parent: Option<usize>,
    pub transform: Transform3D,
    /// Behaviour type name to its persisted configuration.
    pub behaviours: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub name: String,
    pub objects: Vec<ObjectRecord>,
}

/// Collect `entity` and its named descendants depth-first, parents first.
fn collect_subtree(
    world: &World,
    entity: Entity,
    parent: Option<usize>,
    order: &mut Vec<(Entity, Option<usize>)>,
) {
    let index = order.len();
    order.push((entity, parent));
    if let Some(children) = world.get::<Children>(entity) {
        for child in children.iter() {
            if world.get::<ObjectName>(child).is_some() && world.get::<Transform3D>(child).is_some()
            {
                collect_subtree(world, child, Some(index), order);
            }
        }
    }
}

/// Captured objects in document order, each with its parent's index.
///
/// Objects whose parent is not itself captured are roots; roots are visited
/// in entity order.
fn capture_order(world: &mut World) -> Vec<(Entity, Option<usize>)> {
    let mut query = world.query_filtered::<(Entity, Option<&ChildOf>), (With<ObjectName>, With<Transform3D>)>();
    let candidates: Vec<(Entity, Option<Entity>)> = query
        .iter(world)
        .map(|(e, parent)| (e, parent.map(|p| p.parent())))
        .collect();

    let mut roots: Vec<Entity> = candidates
        .iter()
        .filter(|(_, parent)| match parent {
            Some(p) => {
                world.get::<ObjectName>(*p).is_none() || world.get::<Transform3D>(*p).is_none()
            }
            None => true,
        })
        .map(|(e, _)| *e)
        .collect();
    roots.sort();

    let mut order = Vec::with_capacity(candidates.len());
    for root in roots {
        collect_subtree(world, root, None, &mut order);
    }
    order
}

/// Capture every object that has both an [`ObjectName`] and a [`Transform3D`].
///
/// Behaviours are captured through the world's [`BehaviourRegistry`]; without
/// one only names and transforms are recorded.
pub fn capture_scene(world: &mut World, name: &str) -> SceneDocument {
    let order = capture_order(world);

    let registry = world.get_resource::<BehaviourRegistry>();
    let objects = order
        .into_iter()
        .map(|(entity, parent)| {
            let mut behaviours = BTreeMap::new();
            if let Some(registry) = registry {
                for entry in registry.iter() {
                    if let Some(config) = (entry.capture)(world, entity) {
                        behaviours.insert(entry.type_name.to_string(), config);
                    }
                }
            }
            ObjectRecord {
                name: world
                    .get::<ObjectName>(entity)
                    .map(|n| n.name().to_string())
                    .unwrap_or_default(),
                parent,
                transform: world.get::<Transform3D>(entity).copied().unwrap_or_default(),
                behaviours,
            }
        })
        .collect::<Vec<_>>();

    info!("Captured scene '{}' with {} objects", name, objects.len());
    SceneDocument {
        name: name.to_string(),
        objects,
    }
}

impl SceneDocument {
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string()?)?;
        info!("Scene '{}' saved to {}", self.name, path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Check parent indices and behaviour type names without touching a world.
    pub fn validate(&self, registry: &BehaviourRegistry) -> Result<(), SceneError> {
        for (index, record) in self.objects.iter().enumerate() {
            if let Some(parent) = record.parent
                && parent >= index
            {
                return Err(SceneError::InvalidParent { index, parent });
            }
            for type_name in record.behaviours.keys() {
                registry.get(type_name)?;
            }
        }
        Ok(())
    }

    /// Spawn every object as a new entity. Returns the entities in document
    /// order.
    ///
    /// The document is validated first. If a behaviour config fails to parse,
    /// everything spawned so far is despawned and the error returned.
    pub fn spawn(&self, world: &mut World) -> Result<Vec<Entity>, SceneError> {
        let registry = world
            .get_resource::<BehaviourRegistry>()
            .cloned()
            .unwrap_or_else(BehaviourRegistry::with_defaults);
        self.validate(&registry)?;

        let mut spawned: Vec<Entity> = Vec::with_capacity(self.objects.len());
        for record in &self.objects {
            let mut entity = world.spawn((ObjectName::new(record.name.clone()), record.transform));
            if let Some(parent) = record.parent {
                entity.insert(ChildOf(spawned[parent]));
            }
            let id = entity.id();
            if let Err(e) = insert_behaviours(&mut entity, record, &registry) {
                entity.despawn();
                // Despawning a root takes its subtree with it.
                for (&root, earlier) in spawned.iter().zip(&self.objects) {
                    if earlier.parent.is_none() {
                        world.despawn(root);
                    }
                }
                return Err(e);
            }
            spawned.push(id);
        }
        world.flush();
        info!("Spawned scene '{}' ({} objects)", self.name, spawned.len());
        Ok(spawned)
    }

    /// Apply the document onto a live scene.
    ///
    /// Records are matched to live objects by name, in capture order, so the
    /// n-th record named "Light" lands on the n-th live "Light". A match gets
    /// the stored transform and config. Behaviours the object already has keep
    /// their runtime state; missing ones are inserted. Unmatched records are
    /// skipped with a warning.
    ///
    /// Every config is parsed before anything is written, so a failing record
    /// leaves the scene untouched.
    pub fn apply(&self, world: &mut World) -> Result<usize, SceneError> {
        let registry = world
            .get_resource::<BehaviourRegistry>()
            .cloned()
            .unwrap_or_else(BehaviourRegistry::with_defaults);
        self.validate(&registry)?;

        let mut live: FxHashMap<String, VecDeque<Entity>> = FxHashMap::default();
        for (entity, _) in capture_order(world) {
            if let Some(name) = world.get::<ObjectName>(entity) {
                live.entry(name.name().to_string()).or_default().push_back(entity);
            }
        }

        let mut targets: Vec<(Entity, &ObjectRecord)> = Vec::with_capacity(self.objects.len());
        for record in &self.objects {
            let Some(target) = live.get_mut(&record.name).and_then(|q| q.pop_front()) else {
                warn!(
                    "Skipping '{}': {}",
                    record.name,
                    LookupError::NameNotFound(record.name.clone())
                );
                continue;
            };
            for (type_name, config) in &record.behaviours {
                (registry.get(type_name)?.check)(config)?;
            }
            targets.push((target, record));
        }

        for &(target, record) in &targets {
            let mut entity = world.entity_mut(target);
            entity.insert(record.transform);
            for (type_name, config) in &record.behaviours {
                (registry.get(type_name)?.apply)(&mut entity, config)?;
            }
        }
        let applied = targets.len();
        info!(
            "Applied scene '{}' to {} of {} objects",
            self.name,
            applied,
            self.objects.len()
        );
        Ok(applied)
    }
}

fn insert_behaviours(
    entity: &mut EntityWorldMut<'_>,
    record: &ObjectRecord,
    registry: &BehaviourRegistry,
) -> Result<(), SceneError> {
    for (type_name, config) in &record.behaviours {
        let entry = registry.get(type_name)?;
        (entry.insert)(entity, config)?;
    }
    Ok(())
}
