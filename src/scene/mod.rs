//! Scene graph helpers.
//!
//! Submodules:
//! - [`builder`] – spawn the demo scene and record its [`SceneHandles`](crate::resources::scenehandles::SceneHandles)
//! - [`document`] – capture, save, load and instantiate scene documents
//! - [`error`] – lookup and scene document errors
//! - [`lookup`] – name, child-index and component lookups returning `Result`
pub mod builder;
pub mod document;
pub mod error;
pub mod lookup;
