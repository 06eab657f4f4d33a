//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! gameplay.
//!
//! Submodules overview
//! - [`debug`] – log behaviour tunables while debug mode is on
//! - [`input`] – replay scripted keys, emit hotkey events, settle edge states
//! - [`jump`] – player controller awake and per-frame update
//! - [`orbit`] – move entities along their orbit
//! - [`particles`] – count particle emissions for enabled systems
//! - [`patrol`] – keyframe patrol interpolation
//! - [`physics`] – integrate dynamic rigid bodies with a ground clamp
//! - [`time`] – update simulation time and delta
//! - [`trigger`] – detect trigger-volume enter/leave and emit events

pub mod debug;
pub mod input;
pub mod jump;
pub mod orbit;
pub mod particles;
pub mod patrol;
pub mod physics;
pub mod time;
pub mod trigger;
