//! Trigger-volume response: lives, respawn and win detection.
//!
//! Attached to the player. The enter/leave observers in
//! [`crate::events::trigger`] update this component and publish outcome
//! events instead of writing into other behaviours.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::behaviour::{Behaviour, Inspector};
use crate::scene::error::{SceneError, config_from_json};

/// Persisted configuration of the trigger response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub starting_lives: i32,
    pub spawn_point: Vec3,
    /// Name of the object that hurts the player on contact.
    pub hazard_name: String,
    /// Name of the object compared against the hazard for the win check.
    pub projectile_name: String,
    /// Half-width of the y band used by the win check.
    pub overlap_tolerance: f32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            spawn_point: Vec3::new(0.0, 0.0, 0.5),
            hazard_name: "Enemy".to_string(),
            projectile_name: "Projectile".to_string(),
            overlap_tolerance: 0.4,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct TriggerResponse {
    pub config: TriggerConfig,
    pub lives: i32,
    pub player_in_trigger: bool,
}

impl Default for TriggerResponse {
    fn default() -> Self {
        Self::new(TriggerConfig::default())
    }
}

impl TriggerResponse {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            lives: config.starting_lives,
            config,
            player_in_trigger: false,
        }
    }

    /// Take one life. Returns true only on the hit that lands exactly on
    /// zero; hits past zero keep counting down without reporting again.
    pub fn lose_life(&mut self) -> bool {
        self.lives -= 1;
        self.lives == 0
    }

    pub fn reset_lives(&mut self) {
        self.lives = self.config.starting_lives;
    }

    /// Win check along y: `hazard_y` must fall in
    /// `[projectile_y - tolerance, projectile_y + tolerance)`.
    pub fn overlaps(&self, hazard_y: f32, projectile_y: f32) -> bool {
        overlap_predicate(hazard_y, projectile_y, self.config.overlap_tolerance)
    }
}

/// Lower bound inclusive, upper bound exclusive.
pub fn overlap_predicate(hazard_y: f32, projectile_y: f32, tolerance: f32) -> bool {
    hazard_y < projectile_y + tolerance && hazard_y >= projectile_y - tolerance
}

impl Behaviour for TriggerResponse {
    const TYPE_NAME: &'static str = "TriggerResponse";

    fn to_json(&self) -> serde_json::Value {
        let c = &self.config;
        serde_json::json!({
            "starting_lives": c.starting_lives,
            "spawn_point": [c.spawn_point.x, c.spawn_point.y, c.spawn_point.z],
            "hazard_name": c.hazard_name,
            "projectile_name": c.projectile_name,
            "overlap_tolerance": c.overlap_tolerance,
        })
    }

    fn from_json(value: &serde_json::Value) -> Result<Self, SceneError> {
        let config: TriggerConfig = config_from_json(Self::TYPE_NAME, value)?;
        Ok(Self::new(config))
    }

    fn reconfigure(&mut self, fresh: Self) {
        self.config = fresh.config;
    }

    fn inspect(&mut self, inspector: &mut Inspector) {
        let mut lives = self.lives as f32;
        if inspector.drag_float("Lives", &mut lives) {
            self.lives = lives.round() as i32;
        }
        inspector.drag_float("Tolerance", &mut self.config.overlap_tolerance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_life_reports_zero_once() {
        let mut tr = TriggerResponse::default();
        assert!(!tr.lose_life());
        assert!(!tr.lose_life());
        assert!(tr.lose_life());
        assert_eq!(tr.lives, 0);
        assert!(!tr.lose_life());
        assert_eq!(tr.lives, -1);
        assert!(!tr.lose_life());
    }

    #[test]
    fn test_overlap_examples() {
        let tr = TriggerResponse::default();
        assert!(tr.overlaps(5.0, 4.7));
        assert!(!tr.overlaps(5.0, 4.5));
    }

    #[test]
    fn test_overlap_bounds() {
        // exactly-representable values so the boundary is exact
        assert!(overlap_predicate(3.5, 4.0, 0.5));
        assert!(!overlap_predicate(4.5, 4.0, 0.5));
        assert!(!overlap_predicate(3.25, 4.0, 0.5));
    }

    #[test]
    fn test_reset_lives() {
        let mut tr = TriggerResponse::default();
        tr.lose_life();
        tr.lose_life();
        tr.reset_lives();
        assert_eq!(tr.lives, 3);
    }

    #[test]
    fn test_json_round_trip_config() {
        let tr = TriggerResponse::default();
        let back = TriggerResponse::from_json(&tr.to_json()).unwrap();
        assert_eq!(back.config, tr.config);
        assert_eq!(back.lives, 3);
    }
}
