//! Scene-graph lookups that report failure instead of assuming a layout.
//!
//! Two flavours are provided: `World`-based functions for setup code and
//! tests, and `*_in` helpers that work on query results inside systems and
//! observers.

use bevy_ecs::hierarchy::Children;
use bevy_ecs::prelude::*;
use bevy_ecs::query::{QueryData, QueryFilter};

use crate::components::objectname::ObjectName;
use crate::scene::error::LookupError;

/// First entity named `name`, in query order.
pub fn find_by_name(world: &mut World, name: &str) -> Result<Entity, LookupError> {
    let mut query = world.query::<(Entity, &ObjectName)>();
    find_by_name_in(query.iter(world), name)
}

/// Same as [`find_by_name`], over an iterator of `(Entity, &ObjectName)`.
pub fn find_by_name_in<'a>(
    mut names: impl Iterator<Item = (Entity, &'a ObjectName)>,
    name: &str,
) -> Result<Entity, LookupError> {
    names
        .find(|(_, n)| n.name() == name)
        .map(|(e, _)| e)
        .ok_or_else(|| LookupError::NameNotFound(name.to_string()))
}

/// Child of `parent` at position `index`.
pub fn child_at(world: &World, parent: Entity, index: usize) -> Result<Entity, LookupError> {
    let entity = world
        .get_entity(parent)
        .map_err(|_| LookupError::Despawned(parent))?;
    child_at_in(entity.get::<Children>(), parent, index)
}

pub fn child_at_in(
    children: Option<&Children>,
    parent: Entity,
    index: usize,
) -> Result<Entity, LookupError> {
    let len = children.map(|c| c.len()).unwrap_or(0);
    children
        .and_then(|c| c.get(index).copied())
        .ok_or(LookupError::IndexOutOfRange { parent, index, len })
}

/// First child of `parent` carrying a `C` component.
pub fn first_child_with<C: Component>(world: &World, parent: Entity) -> Result<Entity, LookupError> {
    let entity = world
        .get_entity(parent)
        .map_err(|_| LookupError::Despawned(parent))?;
    entity
        .get::<Children>()
        .and_then(|children| children.iter().find(|&child| world.get::<C>(child).is_some()))
        .ok_or(LookupError::MissingComponent {
            entity: parent,
            component: short_type_name::<C>(),
        })
}

/// First child of `parent` that matches `query`.
pub fn first_child_in<D: QueryData, F: QueryFilter>(
    children: Option<&Children>,
    query: &Query<D, F>,
    parent: Entity,
    component: &'static str,
) -> Result<Entity, LookupError> {
    children
        .and_then(|children| children.iter().find(|&child| query.contains(child)))
        .ok_or(LookupError::MissingComponent {
            entity: parent,
            component,
        })
}

/// Display name of `entity`, or its id when it has none.
pub fn display_name(names: &Query<&ObjectName>, entity: Entity) -> String {
    names
        .get(entity)
        .map(|n| n.name().to_string())
        .unwrap_or_else(|_| format!("{entity:?}"))
}

fn short_type_name<C>() -> &'static str {
    let full = std::any::type_name::<C>();
    full.rsplit("::").next().unwrap_or(full)
}
