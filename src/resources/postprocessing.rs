//! Post-processing effect parameters.
//!
//! The renderer owns the actual passes; gameplay only mutates the public
//! parameters kept here.

use bevy_ecs::prelude::Resource;
use glam::Vec4;

/// Colour grading pass. `choice` selects the lookup table: 0 is neutral,
/// 1 is the hurt grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCorrectionEffect {
    pub enabled: bool,
    pub strength: f32,
    pub choice: f32,
}

impl Default for ColorCorrectionEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.0,
            choice: 0.0,
        }
    }
}

impl ColorCorrectionEffect {
    pub fn change_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    pub fn change_choice(&mut self, choice: f32) {
        self.choice = choice;
    }
}

/// Edge outline pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineEffect {
    /// RGBA outline colour.
    pub color: Vec4,
}

impl Default for OutlineEffect {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PostProcessing {
    pub color_correction: ColorCorrectionEffect,
    pub outline: OutlineEffect,
}
