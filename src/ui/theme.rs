//! UI Theme Interface
//!
//! Main entry point for the theme system. Everything theme-related lives in
//! theme_system/ (machinery) and themes/ (palettes) and is re-exported here.

pub use crate::ui::theme_system::{
    editor_colors, get_background_color, get_current_theme, get_editor_colors,
    get_foreground_color, get_padding, get_primary_color, theme_for, BaselineTheme, ColorName,
    CurrentTheme, EditorColors, FluentTheme, FluentThemePlugin, FontResource, IconName,
    IconResource, Palette, Rgba8, SizeName, TextStyle, Theme, ThemeVariant,
};
pub use crate::ui::themes::{DarkTheme, LightTheme};
