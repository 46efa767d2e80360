//! Core theme contract
//!
//! [`Theme`] is what the toolkit calls while painting. Every query is total:
//! a provider answers the tokens it knows and hands everything else to the
//! baseline theme, so new toolkit tokens never break an older provider.

use super::editor_colors::{editor_colors, EditorColors};
use super::resources::{FontResource, IconResource};
use super::tokens::{ColorName, IconName, SizeName, TextStyle, COLOR_BACKGROUND};
use crate::ui::themes::{DarkTheme, LightTheme};
use bevy::prelude::*;

/// Query surface the toolkit uses to style widgets
pub trait Theme: Send + Sync + 'static {
    /// Display name of the theme
    fn name(&self) -> &'static str;

    fn color(&self, name: ColorName<'_>, variant: ThemeVariant) -> Color;

    fn font(&self, style: TextStyle) -> FontResource;

    fn icon(&self, name: IconName<'_>) -> IconResource;

    fn size(&self, name: SizeName<'_>) -> f32;
}

/// Light or dark appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Dark, ThemeVariant::Light];

    /// Parse a variant name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeVariant::Dark),
            "light" => Some(ThemeVariant::Light),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(ThemeVariant::name).collect()
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeVariant::Dark)
    }
}

/// Provider for a variant
pub fn theme_for(variant: ThemeVariant) -> Box<dyn Theme> {
    match variant {
        ThemeVariant::Dark => Box::new(DarkTheme::new()),
        ThemeVariant::Light => Box::new(LightTheme::new()),
    }
}

/// The theme the app is currently painted with
#[derive(Resource)]
pub struct CurrentTheme {
    variant: ThemeVariant,
    theme: Box<dyn Theme>,
}

impl CurrentTheme {
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            theme: theme_for(variant),
        }
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Select the other static theme. No-op when already active.
    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if self.variant == variant {
            return;
        }
        info!("Switching theme: {} -> {}", self.variant.name(), variant.name());
        self.variant = variant;
        self.theme = theme_for(variant);
    }

    /// Color for `name` under the active variant
    pub fn color(&self, name: ColorName<'_>) -> Color {
        self.theme.color(name, self.variant)
    }

    pub fn background_color(&self) -> Color {
        self.color(COLOR_BACKGROUND)
    }

    pub fn editor_colors(&self) -> EditorColors {
        editor_colors(self.variant.is_dark())
    }
}

impl Default for CurrentTheme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parsing_ignores_case() {
        assert_eq!(ThemeVariant::parse("Dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::parse(" LIGHT "), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::parse("strawberry"), None);
        assert_eq!(ThemeVariant::all_names(), vec!["dark", "light"]);
    }

    #[test]
    fn theme_for_picks_matching_provider() {
        assert_eq!(theme_for(ThemeVariant::Dark).name(), "Fluent Dark");
        assert_eq!(theme_for(ThemeVariant::Light).name(), "Fluent Light");
    }

    #[test]
    fn set_variant_swaps_provider() {
        let mut current = CurrentTheme::default();
        assert_eq!(current.variant(), ThemeVariant::Dark);

        current.set_variant(ThemeVariant::Light);
        assert_eq!(current.variant(), ThemeVariant::Light);
        assert_eq!(current.theme().name(), "Fluent Light");
        assert_eq!(current.editor_colors(), editor_colors(false));
    }
}
