//! Error types for scene lookups and scene documents.

use bevy_ecs::prelude::Entity;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::resources::scenehandles::SceneRole;

/// A scene-graph lookup that did not resolve.
///
/// Gameplay systems log these with `warn!` and skip the dependent effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no object named `{0}`")]
    NameNotFound(String),

    #[error("{parent:?} has no child at index {index} ({len} children)")]
    IndexOutOfRange {
        parent: Entity,
        index: usize,
        len: usize,
    },

    #[error("{entity:?} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("{0:?} no longer exists")]
    Despawned(Entity),

    #[error("scene handle {0:?} was never registered")]
    MissingHandle(SceneRole),
}

/// Failure while reading, writing or instantiating a scene document.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {behaviour} config: {source}")]
    InvalidConfig {
        behaviour: &'static str,
        source: serde_json::Error,
    },

    #[error("Unknown behaviour type `{0}`")]
    UnknownBehaviour(String),

    #[error("Keyframes must both be scalars or both be vectors")]
    MismatchedKeyframes,

    #[error("Object {index} has parent {parent}, which is not an earlier object")]
    InvalidParent { index: usize, parent: usize },
}

/// Deserialize a behaviour's persisted config, failing on any missing or
/// mistyped field.
pub fn config_from_json<T: DeserializeOwned>(
    behaviour: &'static str,
    value: &serde_json::Value,
) -> Result<T, SceneError> {
    serde_json::from_value(value.clone())
        .map_err(|source| SceneError::InvalidConfig { behaviour, source })
}
