//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data and behaviors such as transforms,
//! physics bodies, trigger volumes, UI panels and the gameplay controllers.
//!
//! Submodules overview:
//! - [`behaviour`] – persist/inspect capability shared by gameplay behaviours
//! - [`camera`] – camera parameters and the main-camera marker
//! - [`collider`] – box colliders and trigger volumes
//! - [`guipanel`] – UI panels and their screen rectangles
//! - [`jump`] – player controller: jump, movement, hurt, win/lose latches
//! - [`light`] – point lights and render descriptors
//! - [`objectname`] – display name used by name lookups
//! - [`orbitmover`] – circular mover around a centre point
//! - [`particlesystem`] – sphere-emitter particle systems
//! - [`patrol`] – keyframe patrol with ping-pong or one-shot policy
//! - [`rigidbody`] – velocity, impulses and named forces
//! - [`transform`] – local position, rotation and scale
//! - [`triggerresponse`] – lives, respawn and win detection on trigger contact
//! - [`tween`] – linear interpolation core shared by patrol and pulse effects

pub mod behaviour;
pub mod camera;
pub mod collider;
pub mod guipanel;
pub mod jump;
pub mod light;
pub mod objectname;
pub mod orbitmover;
pub mod particlesystem;
pub mod patrol;
pub mod rigidbody;
pub mod transform;
pub mod triggerresponse;
pub mod tween;
