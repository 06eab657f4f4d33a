use bevy_ecs::prelude::Component;

/// Display name of a scene object. Used by name lookups and log output.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectName(pub String);

impl ObjectName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}
