//! Texture handles and texture-unit bindings.
//!
//! Textures are identified by asset path. Loading the same path twice
//! returns the same [`TextureHandle`]. Pixel data stays with the renderer;
//! the store only tracks which handle is bound to which unit.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

/// Texture unit used for the lighting-toggle feedback texture.
pub const FEEDBACK_TEXTURE_UNIT: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Resource, Debug, Default)]
pub struct TextureStore {
    paths: Vec<String>,
    by_path: FxHashMap<String, TextureHandle>,
    bindings: FxHashMap<u32, TextureHandle>,
}

impl TextureStore {
    /// Load (or reuse) the texture at `path`.
    pub fn load(&mut self, path: &str) -> TextureHandle {
        if let Some(handle) = self.by_path.get(path) {
            return *handle;
        }
        let handle = TextureHandle(self.paths.len() as u32);
        self.paths.push(path.to_string());
        self.by_path.insert(path.to_string(), handle);
        debug!("Loaded texture {} as {:?}", path, handle);
        handle
    }

    pub fn bind(&mut self, handle: TextureHandle, unit: u32) {
        self.bindings.insert(unit, handle);
    }

    /// Load `path` and bind it to `unit` in one step.
    pub fn load_and_bind(&mut self, path: &str, unit: u32) -> TextureHandle {
        let handle = self.load(path);
        self.bind(handle, unit);
        handle
    }

    pub fn bound(&self, unit: u32) -> Option<TextureHandle> {
        self.bindings.get(&unit).copied()
    }

    /// Asset path of whatever is bound to `unit`.
    pub fn bound_path(&self, unit: u32) -> Option<&str> {
        self.bound(unit).and_then(|h| self.path(h))
    }

    pub fn path(&self, handle: TextureHandle) -> Option<&str> {
        self.paths.get(handle.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_cached() {
        let mut store = TextureStore::default();
        let a = store.load("textures/black.png");
        let b = store.load("textures/black.png");
        let c = store.load("textures/green.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_bind_replaces_unit() {
        let mut store = TextureStore::default();
        store.load_and_bind("textures/black.png", FEEDBACK_TEXTURE_UNIT);
        store.load_and_bind("textures/blue.png", FEEDBACK_TEXTURE_UNIT);
        assert_eq!(store.bound_path(FEEDBACK_TEXTURE_UNIT), Some("textures/blue.png"));
        assert_eq!(store.bound(0), None);
    }
}
