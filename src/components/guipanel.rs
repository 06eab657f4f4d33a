//! UI panel components.
//!
//! Panels live under the scene's canvas object. Gameplay only ever flips
//! [`GuiPanel::enabled`]; layout is carried in [`RectTransform`] for
//! persistence and debug output.

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec4};

/// A flat UI panel that can be shown or hidden.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct GuiPanel {
    pub enabled: bool,
    /// RGBA tint.
    pub color: Vec4,
    /// Texture asset path, if the panel shows an image.
    pub texture: Option<String>,
}

impl Default for GuiPanel {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Vec4::ONE,
            texture: None,
        }
    }
}

impl GuiPanel {
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Screen-space rectangle of a UI element, in pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RectTransform {
    pub min: Vec2,
    pub max: Vec2,
    pub position: Vec2,
}

impl RectTransform {
    pub fn new(min: Vec2, max: Vec2, position: Vec2) -> Self {
        Self { min, max, position }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
