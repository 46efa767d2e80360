use crate::ui::theme_system::color::Rgba8;
use crate::ui::theme_system::editor_colors::EditorColors;
use crate::ui::theme_system::palette_theme::{FluentTheme, Palette, FLUENT_SIZES};
use crate::ui::theme_system::tokens::*;
use crate::ui::theme_system::ThemeVariant;

pub type LightTheme = FluentTheme<LightPalette>;

pub const BACKGROUND: Rgba8 = Rgba8::rgb(0xf3, 0xf3, 0xf3);
pub const BUTTON: Rgba8 = Rgba8::rgb(0xfb, 0xfb, 0xfb);
pub const DISABLED_BUTTON: Rgba8 = Rgba8::rgb(0xf5, 0xf5, 0xf5);
pub const DISABLED: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x5c);
pub const ERROR: Rgba8 = Rgba8::rgb(0xc4, 0x2b, 0x1c);
pub const FOCUS: Rgba8 = Rgba8::rgb(0x00, 0x5f, 0xb8);
pub const FOREGROUND: Rgba8 = Rgba8::rgb(0x1b, 0x1b, 0x1b);
pub const FOREGROUND_ON_PRIMARY: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
pub const HEADER_BACKGROUND: Rgba8 = Rgba8::rgb(0xee, 0xee, 0xee);
pub const HOVER: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x09);
pub const HYPERLINK: Rgba8 = Rgba8::rgb(0x00, 0x3e, 0x92);
pub const INPUT_BACKGROUND: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
pub const INPUT_BORDER: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x72);
pub const MENU_BACKGROUND: Rgba8 = Rgba8::rgb(0xf9, 0xf9, 0xf9);
pub const OVERLAY_BACKGROUND: Rgba8 = Rgba8::rgb(0xf9, 0xf9, 0xf9);
pub const PLACEHOLDER: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x9e);
pub const PRESSED: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x06);
pub const PRIMARY: Rgba8 = Rgba8::rgb(0x00, 0x5f, 0xb8);
pub const SCROLL_BAR: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x72);
pub const SELECTION: Rgba8 = Rgba8::rgba(0x00, 0x5f, 0xb8, 0x40);
pub const SEPARATOR: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x0f);
pub const SHADOW: Rgba8 = Rgba8::rgba(0x00, 0x00, 0x00, 0x24);
pub const SUCCESS: Rgba8 = Rgba8::rgb(0x0f, 0x7b, 0x0f);
pub const WARNING: Rgba8 = Rgba8::rgb(0x9d, 0x5d, 0x00);

pub struct LightPalette;

impl Palette for LightPalette {
    const NAME: &'static str = "Fluent Light";
    const VARIANT: ThemeVariant = ThemeVariant::Light;

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

pub const EDITOR_BACKGROUND: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);

// Syntax colors are chosen for light backgrounds and do not reuse the dark
// theme's shared constants.
pub fn editor_colors() -> EditorColors {
    EditorColors {
        background: EDITOR_BACKGROUND.into(),
        gutter: Rgba8::rgb(0xf3, 0xf3, 0xf3).into(),
        selection: Rgba8::rgb(0xad, 0xd6, 0xff).into(),
        cursor: Rgba8::rgb(0x00, 0x00, 0x00).into(),
        line_highlight: Rgba8::rgb(0xf0, 0xf0, 0xf0).into(),
        line_number: Rgba8::rgb(0x23, 0x78, 0x93).into(),
        keyword: Rgba8::rgb(0x00, 0x00, 0xff).into(),
        string: Rgba8::rgb(0xa3, 0x15, 0x15).into(),
        comment: Rgba8::rgb(0x00, 0x80, 0x00).into(),
        number: Rgba8::rgb(0x09, 0x86, 0x58).into(),
        function: Rgba8::rgb(0x79, 0x5e, 0x26).into(),
        type_name: Rgba8::rgb(0x26, 0x7f, 0x99).into(),
    }
}
