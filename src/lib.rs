//! Jumpstage library.
//!
//! A small 3D platformer stage simulated headlessly on an ECS world. This
//! module exposes the components, resources, systems, events and scene
//! helpers for use in integration tests and by the `jumpstage` binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scene;
pub mod systems;
