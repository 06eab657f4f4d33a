//! Game configuration resource.
//!
//! Manages simulation and gameplay settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! frames = 600
//! delta = 0.016666
//! time_scale = 1.0
//!
//! [player]
//! impulse = 6.0
//! move_speed = 2.0
//! ground_threshold = 1.0
//! lives = 3
//!
//! [scene]
//! save_path = scene.json
//! light_count = 50
//! seed = 42
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_IMPULSE: f32 = 6.0;
const DEFAULT_MOVE_SPEED: f32 = 2.0;
const DEFAULT_GROUND_THRESHOLD: f32 = 1.0;
const DEFAULT_LIVES: i32 = 3;
const DEFAULT_LIGHT_COUNT: u32 = 50;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Number of frames the headless driver simulates.
    pub frames: u64,
    /// Fixed frame delta in seconds, before time scaling.
    pub delta: f32,
    pub time_scale: f32,
    pub impulse: f32,
    /// Planar movement speed applied to both x and y.
    pub move_speed: f32,
    pub ground_threshold: f32,
    pub lives: i32,
    /// Where the scene document is written, if anywhere.
    pub save_path: Option<PathBuf>,
    /// Number of random lights in the demo scene.
    pub light_count: u32,
    /// Seed for the demo scene's random lights; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            delta: DEFAULT_DELTA,
            time_scale: DEFAULT_TIME_SCALE,
            impulse: DEFAULT_IMPULSE,
            move_speed: DEFAULT_MOVE_SPEED,
            ground_threshold: DEFAULT_GROUND_THRESHOLD,
            lives: DEFAULT_LIVES,
            save_path: None,
            light_count: DEFAULT_LIGHT_COUNT,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: frames={}, delta={}, time_scale={}, impulse={}, lives={}, lights={}",
            self.frames, self.delta, self.time_scale, self.impulse, self.lives, self.light_count
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [simulation] section
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames;
        }
        if let Some(delta) = config.getfloat("simulation", "delta").ok().flatten() {
            self.delta = delta as f32;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        // [player] section
        if let Some(impulse) = config.getfloat("player", "impulse").ok().flatten() {
            self.impulse = impulse as f32;
        }
        if let Some(speed) = config.getfloat("player", "move_speed").ok().flatten() {
            self.move_speed = speed as f32;
        }
        if let Some(threshold) = config.getfloat("player", "ground_threshold").ok().flatten() {
            self.ground_threshold = threshold as f32;
        }
        if let Some(lives) = config.getint("player", "lives").ok().flatten() {
            self.lives = lives as i32;
        }

        // [scene] section
        if let Some(path) = config.get("scene", "save_path") {
            self.save_path = Some(PathBuf::from(path));
        }
        if let Some(count) = config.getuint("scene", "light_count").ok().flatten() {
            self.light_count = count as u32;
        }
        if let Some(seed) = config.getuint("scene", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "frames", Some(self.frames.to_string()));
        config.set("simulation", "delta", Some(self.delta.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        // [player] section
        config.set("player", "impulse", Some(self.impulse.to_string()));
        config.set("player", "move_speed", Some(self.move_speed.to_string()));
        config.set(
            "player",
            "ground_threshold",
            Some(self.ground_threshold.to_string()),
        );
        config.set("player", "lives", Some(self.lives.to_string()));

        // [scene] section
        if let Some(path) = &self.save_path {
            config.set("scene", "save_path", Some(path.display().to_string()));
        }
        config.set("scene", "light_count", Some(self.light_count.to_string()));
        if let Some(seed) = self.seed {
            config.set("scene", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
