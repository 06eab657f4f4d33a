//! Typed handles to the scene objects gameplay needs to reach.
//!
//! Resolved once while the scene is built, so gameplay never depends on
//! child ordering. A handle may outlive its entity; callers check
//! [`World::get_entity`](bevy_ecs::world::World::get_entity) or query
//! results before use.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::scene::error::LookupError;

/// Role an object plays in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneRole {
    Player,
    Enemy,
    Projectile,
    Coin,
    /// Particle system under the coin, enabled on win.
    CelebrationParticles,
    WinScreen,
    LoseScreen,
    Canvas,
    MainCamera,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SceneHandles {
    handles: FxHashMap<SceneRole, Entity>,
}

impl SceneHandles {
    pub fn set(&mut self, role: SceneRole, entity: Entity) {
        self.handles.insert(role, entity);
    }

    pub fn get(&self, role: SceneRole) -> Result<Entity, LookupError> {
        self.handles
            .get(&role)
            .copied()
            .ok_or(LookupError::MissingHandle(role))
    }

    pub fn remove(&mut self, role: SceneRole) -> Option<Entity> {
        self.handles.remove(&role)
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
