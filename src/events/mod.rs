//! Event types and observers.
//!
//! Events provide a decoupled way for systems and behaviours to communicate:
//! the publisher triggers an event, observers registered on the world react.
//!
//! Submodules:
//! - [`outcome`] – hurt/win/lose/restart outcomes and the observers applying them
//! - [`switchdebug`] – toggle behaviour inspection on/off
//! - [`trigger`] – trigger-volume enter/leave and the trigger response observers
pub mod outcome;
pub mod switchdebug;
pub mod trigger;
