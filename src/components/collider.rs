//! Box colliders and trigger volumes.
//!
//! A [`BoxCollider3D`] gives an entity an axis-aligned extent around its
//! position. Entities that also carry a [`TriggerVolume`] report overlap
//! begin/end with every other collider through
//! [`TriggerEnterEvent`](crate::events::trigger::TriggerEnterEvent) and
//! [`TriggerLeaveEvent`](crate::events::trigger::TriggerLeaveEvent) instead
//! of producing a physical response.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider3D {
    pub half_extents: Vec3,
    pub offset: Vec3,
}

impl BoxCollider3D {
    /// Create a cube-ish collider with the given half extents.
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.abs(),
            offset: Vec3::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vec3) -> (Vec3, Vec3) {
        let center = position + self.offset;
        (center - self.half_extents, center + self.half_extents)
    }

    /// AABB vs AABB overlap test against another collider at a different entity position.
    pub fn overlaps(&self, position: Vec3, other: &Self, other_position: Vec3) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x
            && max_a.x > min_b.x
            && min_a.y < max_b.y
            && max_a.y > min_b.y
            && min_a.z < max_b.z
            && max_a.z > min_b.z
    }
}

/// Marks a collider as a trigger volume and remembers what is inside it.
#[derive(Debug, Clone, Default, Component)]
pub struct TriggerVolume {
    /// Entities overlapping the volume as of the last detection pass.
    pub overlapping: SmallVec<[Entity; 4]>,
}

impl TriggerVolume {
    pub fn contains(&self, entity: Entity) -> bool {
        self.overlapping.contains(&entity)
    }
}
