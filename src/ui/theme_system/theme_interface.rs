//! Theme System Interface
//!
//! Convenience accessors for systems that read the current theme. Use these
//! instead of reaching into palette constants so a theme switch is picked up.

use super::core::{CurrentTheme, Theme};
use super::editor_colors::EditorColors;
use super::tokens::{COLOR_FOREGROUND, COLOR_PRIMARY, SIZE_PADDING};
use bevy::prelude::*;

/// Helper function to get current theme
pub fn get_current_theme<'a>(theme_res: &'a Res<CurrentTheme>) -> &'a dyn Theme {
    theme_res.theme()
}

/// Get background color from current theme
pub fn get_background_color(theme: &Res<CurrentTheme>) -> Color {
    theme.background_color()
}

/// Get foreground (text) color from current theme
pub fn get_foreground_color(theme: &Res<CurrentTheme>) -> Color {
    theme.color(COLOR_FOREGROUND)
}

/// Get accent color from current theme
pub fn get_primary_color(theme: &Res<CurrentTheme>) -> Color {
    theme.color(COLOR_PRIMARY)
}

pub fn get_padding(theme: &Res<CurrentTheme>) -> f32 {
    theme.theme().size(SIZE_PADDING)
}

/// Full code editor palette for the current theme
pub fn get_editor_colors(theme: &Res<CurrentTheme>) -> EditorColors {
    theme.editor_colors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme_system::ThemeVariant;
    use crate::ui::themes::dark;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn accessors_read_the_installed_theme() {
        let mut world = World::new();
        world.insert_resource(CurrentTheme::new(ThemeVariant::Dark));

        let (background, foreground, primary, padding) = world
            .run_system_once(|theme: Res<CurrentTheme>| {
                (
                    get_background_color(&theme),
                    get_foreground_color(&theme),
                    get_primary_color(&theme),
                    get_padding(&theme),
                )
            })
            .expect("accessor system should run");

        assert_eq!(background, Color::from(dark::BACKGROUND));
        assert_eq!(foreground, Color::from(dark::FOREGROUND));
        assert_eq!(primary, Color::from(dark::PRIMARY));
        assert_eq!(padding, 8.0);
    }
}
