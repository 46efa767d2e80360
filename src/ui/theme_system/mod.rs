//! Theme system infrastructure
//!
//! This module contains the infrastructure code that powers the theming system,
//! including the core trait definitions, the baseline fallback theme, the
//! palette-driven provider, and the Bevy plugin.
//!
//! Actual palette definitions live in ../themes/

pub mod baseline;
pub mod color;
pub mod core;
pub mod editor_colors;
pub mod palette_theme;
pub mod plugin;
pub mod resources;
pub mod theme_interface;
pub mod tokens;

// Re-export commonly used items
pub use self::core::{theme_for, CurrentTheme, Theme, ThemeVariant};
pub use baseline::BaselineTheme;
pub use color::Rgba8;
pub use editor_colors::{editor_colors, EditorColors};
pub use palette_theme::{FluentTheme, Palette};
pub use plugin::FluentThemePlugin;
pub use resources::{FontResource, IconResource};
pub use theme_interface::*;
pub use tokens::{ColorName, IconName, SizeName, TextStyle};
