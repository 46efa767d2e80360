//! Bevy integration for the Fluent themes
//!
//! Installs the selected theme as a resource and keeps the derived resources
//! (editor colors, window clear color) in step with it.

use super::core::{CurrentTheme, ThemeVariant};
use super::editor_colors::EditorColors;
use bevy::prelude::*;

/// Plugin that installs [`CurrentTheme`] and its derived resources
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentThemePlugin {
    pub variant: ThemeVariant,
}

impl FluentThemePlugin {
    pub fn new(variant: ThemeVariant) -> Self {
        Self { variant }
    }
}

impl Plugin for FluentThemePlugin {
    fn build(&self, app: &mut App) {
        info!("Using {} theme", self.variant.name());

        let current_theme = CurrentTheme::new(self.variant);
        let background_color = current_theme.background_color();
        let editor_colors = current_theme.editor_colors();

        app.insert_resource(current_theme)
            .insert_resource(editor_colors)
            .insert_resource(ClearColor(background_color))
            .add_systems(
                Update,
                apply_theme_change.run_if(resource_changed::<CurrentTheme>),
            );
    }
}

/// Re-derive theme-dependent resources after the theme changes
pub fn apply_theme_change(
    theme: Res<CurrentTheme>,
    mut editor_colors: ResMut<EditorColors>,
    mut clear_color: ResMut<ClearColor>,
) {
    let updated = theme.editor_colors();
    if *editor_colors != updated {
        debug!("Refreshing editor colors for {} theme", theme.variant().name());
        *editor_colors = updated;
    }
    clear_color.0 = theme.background_color();
}
