//! Font and icon resources
//!
//! Themes hand out asset paths rather than live handles so that providers
//! stay zero-sized and usable outside a running app. Systems turn them into
//! handles through the [`AssetServer`].

use bevy::prelude::*;

/// Font asset owned by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontResource {
    path: &'static str,
}

impl FontResource {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// Asset path relative to the assets directory
    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub fn load(&self, asset_server: &AssetServer) -> Handle<Font> {
        debug!("Loading theme font {}", self.path);
        asset_server.load(self.path)
    }
}

/// Icon asset owned by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconResource {
    path: &'static str,
}

impl IconResource {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub fn load(&self, asset_server: &AssetServer) -> Handle<Image> {
        debug!("Loading theme icon {}", self.path);
        asset_server.load(self.path)
    }
}
