use bevy_ecs::prelude::Resource;

/// Global tuning for [`physics_step`](crate::systems::physics::physics_step).
#[derive(Resource, Debug, Clone, Copy)]
pub struct PhysicsSettings {
    /// Height of the ground plane. Dynamic bodies never sink below it.
    pub ground_height: f32,
    /// Gravity added to every new dynamic body as the `gravity` force.
    pub gravity: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            ground_height: 0.5,
            gravity: -9.81,
        }
    }
}
