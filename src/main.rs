//! Jumpstage headless driver.
//!
//! Simulates the demo stage for a fixed number of frames:
//!
//! 1. Load `config.ini` (defaults on any error) and apply CLI overrides
//! 2. Build the ECS world, register observers, spawn the demo scene
//! 3. Optionally apply a saved scene document over the demo scene
//! 4. Optionally load a scripted input file replayed frame by frame
//! 5. Run the update schedule with a fixed delta
//! 6. Optionally capture the scene and write it as JSON
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600 --input-script inputs.txt --save-scene scene.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use jumpstage::game::{build_update_schedule, init_world, register_observers, run_frame};
use jumpstage::resources::gameconfig::GameConfig;
use jumpstage::resources::input::InputScript;
use jumpstage::scene::builder::build_demo_scene;
use jumpstage::scene::document::{SceneDocument, capture_scene};

/// Jumpstage headless simulation
#[derive(Parser)]
#[command(version, about = "Runs the jumpstage demo scene without a window.")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate. Overrides the config file.
    #[arg(long)]
    frames: Option<u64>,

    /// Scripted key presses to replay.
    #[arg(long, value_name = "PATH")]
    input_script: Option<PathBuf>,

    /// Write the scene document here after the run. Overrides the config file.
    #[arg(long, value_name = "PATH")]
    save_scene: Option<PathBuf>,

    /// Apply a saved scene document over the demo scene before running.
    #[arg(long, value_name = "PATH")]
    load_scene: Option<PathBuf>,

    /// Seed for the demo scene's random lights. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("Using default config: {}", e);
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = cli.save_scene {
        config.save_path = Some(path);
    }

    // --------------- ECS world + scene ---------------
    let mut world = init_world(&config);
    register_observers(&mut world);
    build_demo_scene(&mut world, &config);

    if let Some(path) = &cli.load_scene {
        match SceneDocument::load(path).and_then(|doc| doc.apply(&mut world)) {
            Ok(count) => info!("Loaded {} objects from {}", count, path.display()),
            Err(e) => {
                error!("Failed to load scene {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &cli.input_script {
        let script = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| InputScript::parse(&text).map_err(|e| e.to_string()));
        match script {
            Ok(script) => {
                info!("Replaying input script {}", path.display());
                world.insert_resource(script);
            }
            Err(e) => {
                error!("Failed to read input script {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let mut update = build_update_schedule();
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    info!("Simulating {} frames at dt={}", config.frames, config.delta);
    for _ in 0..config.frames {
        run_frame(&mut world, &mut update, config.delta);
    }

    if let Some(path) = &config.save_path {
        let document = capture_scene(&mut world, "demo");
        if let Err(e) = document.save(path) {
            error!("Failed to save scene {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
    info!("Done");
}
