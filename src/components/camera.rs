use bevy_ecs::prelude::Component;

/// Focal depth the win/lose screens narrow the camera to.
pub const NARROW_FOCAL_DEPTH: f32 = 0.1;

/// Perspective camera parameters read by the depth-of-field pass.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub focal_depth: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            focal_depth: 5.0,
            fov: 60.0,
        }
    }
}

/// Marks the camera the scene renders through.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MainCamera;
