use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Scene-wide lighting state.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneLighting {
    pub ambient: Vec3,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self { ambient: Vec3::ONE }
    }
}

impl SceneLighting {
    pub fn set_ambient_light(&mut self, ambient: Vec3) {
        self.ambient = ambient;
    }
}
