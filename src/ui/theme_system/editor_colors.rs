//! Code editor colors
//!
//! The editor widget paints from a single bundle rather than asking the theme
//! token by token. It fetches the bundle once and again on theme switch.

use crate::ui::themes::{dark, light};
use bevy::prelude::*;

/// Every color a code editor view needs
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EditorColors {
    pub background: Color,
    pub gutter: Color,
    pub selection: Color,
    pub cursor: Color,
    pub line_highlight: Color,
    pub line_number: Color,

    // Syntax categories
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub function: Color,
    pub type_name: Color,
}

impl EditorColors {
    /// Field names paired with their colors, in declaration order
    pub fn roles(&self) -> [(&'static str, Color); 12] {
        [
            ("background", self.background),
            ("gutter", self.gutter),
            ("selection", self.selection),
            ("cursor", self.cursor),
            ("line_highlight", self.line_highlight),
            ("line_number", self.line_number),
            ("keyword", self.keyword),
            ("string", self.string),
            ("comment", self.comment),
            ("number", self.number),
            ("function", self.function),
            ("type_name", self.type_name),
        ]
    }
}

impl Default for EditorColors {
    fn default() -> Self {
        editor_colors(true)
    }
}

/// Editor bundle for the dark or light theme
pub fn editor_colors(is_dark: bool) -> EditorColors {
    if is_dark {
        dark::editor_colors()
    } else {
        light::editor_colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme_system::color::Rgba8;

    #[test]
    fn backgrounds_come_from_variant_constants() {
        assert_eq!(
            editor_colors(true).background,
            Color::from(dark::EDITOR_BACKGROUND)
        );
        assert_eq!(
            editor_colors(false).background,
            Color::from(light::EDITOR_BACKGROUND)
        );
        assert_ne!(editor_colors(true).background, editor_colors(false).background);
    }

    #[test]
    fn dark_syntax_uses_shared_constants() {
        let colors = editor_colors(true);
        assert_eq!(colors.keyword, Color::from(dark::SYNTAX_KEYWORD));
        assert_eq!(colors.string, Color::from(dark::SYNTAX_STRING));
        assert_eq!(colors.comment, Color::from(dark::SYNTAX_COMMENT));
        assert_eq!(colors.number, Color::from(dark::SYNTAX_NUMBER));
        assert_eq!(colors.function, Color::from(dark::SYNTAX_FUNCTION));
        assert_eq!(colors.type_name, Color::from(dark::SYNTAX_TYPE));
    }

    #[test]
    fn light_syntax_keeps_its_own_literals() {
        let colors = editor_colors(false);
        assert_eq!(Rgba8::from(colors.keyword), Rgba8::rgb(0x00, 0x00, 0xff));
        assert_eq!(Rgba8::from(colors.comment), Rgba8::rgb(0x00, 0x80, 0x00));
        assert_ne!(colors.keyword, Color::from(dark::SYNTAX_KEYWORD));
    }

    #[test]
    fn roles_cover_all_twelve_fields() {
        let colors = editor_colors(true);
        let roles = colors.roles();
        assert_eq!(roles[0], ("background", colors.background));
        assert_eq!(roles[11], ("type_name", colors.type_name));
    }
}
