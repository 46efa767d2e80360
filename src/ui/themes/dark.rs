use crate::ui::theme_system::color::Rgba8;
use crate::ui::theme_system::editor_colors::EditorColors;
use crate::ui::theme_system::palette_theme::{FluentTheme, Palette, FLUENT_SIZES};
use crate::ui::theme_system::tokens::*;
use crate::ui::theme_system::ThemeVariant;

pub type DarkTheme = FluentTheme<DarkPalette>;

// =================================================================
// UI PALETTE
// =================================================================

pub const BACKGROUND: Rgba8 = Rgba8::rgb(0x20, 0x20, 0x20);
pub const BUTTON: Rgba8 = Rgba8::rgb(0x2d, 0x2d, 0x2d);
pub const DISABLED_BUTTON: Rgba8 = Rgba8::rgb(0x2a, 0x2a, 0x2a);
pub const DISABLED: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x5d);
pub const ERROR: Rgba8 = Rgba8::rgb(0xff, 0x99, 0xa4);
pub const FOCUS: Rgba8 = Rgba8::rgb(0x60, 0xcd, 0xff);
pub const FOREGROUND: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
pub const FOREGROUND_ON_PRIMARY: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
pub const HEADER_BACKGROUND: Rgba8 = Rgba8::rgb(0x2b, 0x2b, 0x2b);
pub const HOVER: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x0f);
pub const HYPERLINK: Rgba8 = Rgba8::rgb(0x99, 0xeb, 0xff);
pub const INPUT_BACKGROUND: Rgba8 = Rgba8::rgb(0x2d, 0x2d, 0x2d);
pub const INPUT_BORDER: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x8b);
pub const MENU_BACKGROUND: Rgba8 = Rgba8::rgb(0x2c, 0x2c, 0x2c);
pub const OVERLAY_BACKGROUND: Rgba8 = Rgba8::rgb(0x2c, 0x2c, 0x2c);
pub const PLACEHOLDER: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x87);
pub const PRESSED: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x0a);
pub const PRIMARY: Rgba8 = Rgba8::rgb(0x60, 0xcd, 0xff);
pub const SCROLL_BAR: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x8b);
pub const SELECTION: Rgba8 = Rgba8::rgba(0x00, 0x78, 0xd4, 0x66);
pub const SEPARATOR: Rgba8 = Rgba8::rgba(0xff, 0xff, 0xff, 0x15);
pub const SHADOW: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x42);
pub const SUCCESS: Rgba8 = Rgba8::rgb(0x6c, 0xcb, 0x5f);
pub const WARNING: Rgba8 = Rgba8::rgb(0xfc, 0xe1, 0x00);

pub struct DarkPalette;

impl Palette for DarkPalette {
    const NAME: &'static str = "Fluent Dark";
    const VARIANT: ThemeVariant = ThemeVariant::Dark;

    const COLORS: &'static [(ColorName<'static>, Rgba8)] = &[
        (COLOR_BACKGROUND, BACKGROUND),
        (COLOR_BUTTON, BUTTON),
        (COLOR_DISABLED_BUTTON, DISABLED_BUTTON),
        (COLOR_DISABLED, DISABLED),
        (COLOR_ERROR, ERROR),
        (COLOR_FOCUS, FOCUS),
        (COLOR_FOREGROUND, FOREGROUND),
        (COLOR_FOREGROUND_ON_PRIMARY, FOREGROUND_ON_PRIMARY),
        (COLOR_HEADER_BACKGROUND, HEADER_BACKGROUND),
        (COLOR_HOVER, HOVER),
        (COLOR_HYPERLINK, HYPERLINK),
        (COLOR_INPUT_BACKGROUND, INPUT_BACKGROUND),
        (COLOR_INPUT_BORDER, INPUT_BORDER),
        (COLOR_MENU_BACKGROUND, MENU_BACKGROUND),
        (COLOR_OVERLAY_BACKGROUND, OVERLAY_BACKGROUND),
        (COLOR_PLACEHOLDER, PLACEHOLDER),
        (COLOR_PRESSED, PRESSED),
        (COLOR_PRIMARY, PRIMARY),
        (COLOR_SCROLL_BAR, SCROLL_BAR),
        (COLOR_SELECTION, SELECTION),
        (COLOR_SEPARATOR, SEPARATOR),
        (COLOR_SHADOW, SHADOW),
        (COLOR_SUCCESS, SUCCESS),
        (COLOR_WARNING, WARNING),
    ];

    const SIZES: &'static [(SizeName<'static>, f32)] = FLUENT_SIZES;
}

// =================================================================
// EDITOR PALETTE
// =================================================================

pub const EDITOR_BACKGROUND: Rgba8 = Rgba8::rgb(0x1e, 0x1e, 0x1e);
pub const EDITOR_GUTTER: Rgba8 = Rgba8::rgb(0x25, 0x25, 0x26);
pub const EDITOR_SELECTION: Rgba8 = Rgba8::rgb(0x26, 0x4f, 0x78);
pub const EDITOR_CURSOR: Rgba8 = Rgba8::rgb(0xae, 0xaf, 0xad);
pub const EDITOR_LINE_HIGHLIGHT: Rgba8 = Rgba8::rgb(0x2a, 0x2d, 0x2e);
pub const EDITOR_LINE_NUMBER: Rgba8 = Rgba8::rgb(0x85, 0x85, 0x85);

// Shared syntax colors
pub const SYNTAX_KEYWORD: Rgba8 = Rgba8::rgb(0x56, 0x9c, 0xd6);
pub const SYNTAX_STRING: Rgba8 = Rgba8::rgb(0xce, 0x91, 0x78);
pub const SYNTAX_COMMENT: Rgba8 = Rgba8::rgb(0x6a, 0x99, 0x55);
pub const SYNTAX_NUMBER: Rgba8 = Rgba8::rgb(0xb5, 0xce, 0xa8);
pub const SYNTAX_FUNCTION: Rgba8 = Rgba8::rgb(0xdc, 0xdc, 0xaa);
pub const SYNTAX_TYPE: Rgba8 = Rgba8::rgb(0x4e, 0xc9, 0xb0);

pub fn editor_colors() -> EditorColors {
    EditorColors {
        background: EDITOR_BACKGROUND.into(),
        gutter: EDITOR_GUTTER.into(),
        selection: EDITOR_SELECTION.into(),
        cursor: EDITOR_CURSOR.into(),
        line_highlight: EDITOR_LINE_HIGHLIGHT.into(),
        line_number: EDITOR_LINE_NUMBER.into(),
        keyword: SYNTAX_KEYWORD.into(),
        string: SYNTAX_STRING.into(),
        comment: SYNTAX_COMMENT.into(),
        number: SYNTAX_NUMBER.into(),
        function: SYNTAX_FUNCTION.into(),
        type_name: SYNTAX_TYPE.into(),
    }
}
