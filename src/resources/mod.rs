//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, effect
//! parameters, asset handles, and scene bookkeeping. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `behaviourregistry` – type name to capture/insert functions for scene documents
//! - `debugmode` – presence enables behaviour inspection logs
//! - `gameconfig` – INI-backed simulation and gameplay settings
//! - `input` – per-frame key states and the scripted key timeline
//! - `physicssettings` – ground plane and gravity
//! - `postprocessing` – colour correction and outline parameters
//! - `scenehandles` – typed handles to scene objects gameplay reaches
//! - `scenelighting` – ambient light
//! - `texturestore` – texture handles and unit bindings
//! - `worldtime` – simulation time and delta
pub mod behaviourregistry;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod physicssettings;
pub mod postprocessing;
pub mod scenehandles;
pub mod scenelighting;
pub mod texturestore;
pub mod worldtime;
