//! Toolkit baseline theme
//!
//! The default look every provider falls back to. Unlike the Fluent
//! providers it answers every token the toolkit defines, and it has a fixed
//! answer for names nobody defines: transparent colors, zero sizes and the
//! missing-icon image.

use super::color::Rgba8;
use super::core::{Theme, ThemeVariant};
use super::resources::{FontResource, IconResource};
use super::tokens::*;
use bevy::color::Color;

/// Color returned for tokens the baseline does not define
pub const UNKNOWN_COLOR: Rgba8 = Rgba8::TRANSPARENT;

/// Size returned for tokens the baseline does not define
pub const UNKNOWN_SIZE: f32 = 0.0;

// =================================================================
// FONTS
// =================================================================

pub const REGULAR_FONT: FontResource = FontResource::new("fonts/NotoSans-Regular.ttf");
pub const BOLD_FONT: FontResource = FontResource::new("fonts/NotoSans-Bold.ttf");
pub const ITALIC_FONT: FontResource = FontResource::new("fonts/NotoSans-Italic.ttf");
pub const BOLD_ITALIC_FONT: FontResource = FontResource::new("fonts/NotoSans-BoldItalic.ttf");
pub const MONOSPACE_FONT: FontResource = FontResource::new("fonts/DejaVuSansMono.ttf");
pub const SYMBOL_FONT: FontResource = FontResource::new("fonts/InterSymbols-Regular.ttf");

// =================================================================
// ICONS
// =================================================================

pub const FOLDER_ICON: IconResource = IconResource::new("icons/folder.png");
pub const FOLDER_OPEN_ICON: IconResource = IconResource::new("icons/folder-open.png");
pub const FILE_ICON: IconResource = IconResource::new("icons/file.png");
pub const COMPUTER_ICON: IconResource = IconResource::new("icons/computer.png");
pub const STORAGE_ICON: IconResource = IconResource::new("icons/storage.png");
pub const MISSING_ICON: IconResource = IconResource::new("icons/broken-image.png");

const ICONS: &[(IconName<'static>, IconResource)] = &[
    (ICON_FOLDER, FOLDER_ICON),
    (ICON_FOLDER_OPEN, FOLDER_OPEN_ICON),
    (ICON_FILE, FILE_ICON),
    (ICON_COMPUTER, COMPUTER_ICON),
    (ICON_STORAGE, STORAGE_ICON),
    (ICON_HOME, IconResource::new("icons/home.png")),
    (ICON_DOCUMENT, IconResource::new("icons/document.png")),
    (ICON_CANCEL, IconResource::new("icons/cancel.png")),
    (ICON_CONFIRM, IconResource::new("icons/confirm.png")),
    (ICON_DELETE, IconResource::new("icons/delete.png")),
    (ICON_SEARCH, IconResource::new("icons/search.png")),
    (ICON_SETTINGS, IconResource::new("icons/settings.png")),
    (ICON_MENU, IconResource::new("icons/menu.png")),
    (ICON_INFO, IconResource::new("icons/info.png")),
    (ICON_ERROR, IconResource::new("icons/error.png")),
    (ICON_WARNING, IconResource::new("icons/warning.png")),
    (ICON_QUESTION, IconResource::new("icons/question.png")),
];

// =================================================================
// SIZES
// =================================================================

const SIZES: &[(SizeName<'static>, f32)] = &[
    (SIZE_PADDING, 6.0),
    (SIZE_INLINE_ICON, 20.0),
    (SIZE_SCROLL_BAR, 16.0),
    (SIZE_SCROLL_BAR_SMALL, 3.0),
    (SIZE_SEPARATOR_THICKNESS, 1.0),
    (SIZE_INPUT_BORDER, 2.0),
    (SIZE_INPUT_RADIUS, 5.0),
    (SIZE_SELECTION_RADIUS, 3.0),
    (SIZE_INNER_PADDING, 8.0),
    (SIZE_LINE_SPACING, 4.0),
    (SIZE_TEXT, 14.0),
    (SIZE_HEADING_TEXT, 24.0),
    (SIZE_SUB_HEADING_TEXT, 18.0),
    (SIZE_CAPTION_TEXT, 11.0),
];

// =================================================================
// COLORS
// =================================================================

const DARK_COLORS: &[(ColorName<'static>, Rgba8)] = &[
    (COLOR_BACKGROUND, Rgba8::rgb(0x17, 0x17, 0x18)),
    (COLOR_BUTTON, Rgba8::rgb(0x28, 0x29, 0x2e)),
    (COLOR_DISABLED_BUTTON, Rgba8::rgb(0x28, 0x29, 0x2e)),
    (COLOR_DISABLED, Rgba8::rgba(0xff, 0xff, 0xff, 0x42)),
    (COLOR_ERROR, Rgba8::rgb(0xf4, 0x43, 0x36)),
    (COLOR_FOCUS, Rgba8::rgba(0x29, 0x6f, 0xf6, 0x7f)),
    (COLOR_FOREGROUND, Rgba8::rgb(0xf3, 0xf3, 0xf3)),
    (COLOR_FOREGROUND_ON_ERROR, Rgba8::rgb(0x17, 0x17, 0x18)),
    (COLOR_FOREGROUND_ON_PRIMARY, Rgba8::rgb(0x17, 0x17, 0x18)),
    (COLOR_FOREGROUND_ON_SUCCESS, Rgba8::rgb(0x17, 0x17, 0x18)),
    (COLOR_FOREGROUND_ON_WARNING, Rgba8::rgb(0x17, 0x17, 0x18)),
    (COLOR_HEADER_BACKGROUND, Rgba8::rgb(0x1b, 0x1b, 0x1b)),
    (COLOR_HOVER, Rgba8::rgba(0xff, 0xff, 0xff, 0x0f)),
    (COLOR_HYPERLINK, Rgba8::rgb(0x29, 0x6f, 0xf6)),
    (COLOR_INPUT_BACKGROUND, Rgba8::rgb(0x20, 0x20, 0x23)),
    (COLOR_INPUT_BORDER, Rgba8::rgb(0x39, 0x39, 0x3a)),
    (COLOR_MENU_BACKGROUND, Rgba8::rgb(0x28, 0x29, 0x2e)),
    (COLOR_OVERLAY_BACKGROUND, Rgba8::rgb(0x18, 0x1d, 0x25)),
    (COLOR_PLACEHOLDER, Rgba8::rgb(0xb2, 0xb2, 0xb2)),
    (COLOR_PRESSED, Rgba8::rgba(0xff, 0xff, 0xff, 0x66)),
    (COLOR_PRIMARY, Rgba8::rgb(0x29, 0x6f, 0xf6)),
    (COLOR_SCROLL_BAR, Rgba8::rgba(0xff, 0xff, 0xff, 0x99)),
    (COLOR_SCROLL_BAR_BACKGROUND, Rgba8::rgba(0x00, 0x00, 0x00, 0x20)),
    (COLOR_SELECTION, Rgba8::rgba(0x29, 0x6f, 0xf6, 0x40)),
    (COLOR_SEPARATOR, Rgba8::rgb(0x00, 0x00, 0x00)),
    (COLOR_SHADOW, Rgba8::rgba(0x00, 0x00, 0x00, 0x66)),
    (COLOR_SUCCESS, Rgba8::rgb(0x43, 0xf4, 0x36)),
    (COLOR_WARNING, Rgba8::rgb(0xff, 0x98, 0x00)),
];

const LIGHT_COLORS: &[(ColorName<'static>, Rgba8)] = &[
    (COLOR_BACKGROUND, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_BUTTON, Rgba8::rgb(0xf5, 0xf5, 0xf5)),
    (COLOR_DISABLED_BUTTON, Rgba8::rgb(0xe5, 0xe5, 0xe5)),
    (COLOR_DISABLED, Rgba8::rgba(0x00, 0x00, 0x00, 0x42)),
    (COLOR_ERROR, Rgba8::rgb(0xf4, 0x43, 0x36)),
    (COLOR_FOCUS, Rgba8::rgba(0x29, 0x6f, 0xf6, 0x7f)),
    (COLOR_FOREGROUND, Rgba8::rgb(0x56, 0x56, 0x56)),
    (COLOR_FOREGROUND_ON_ERROR, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_FOREGROUND_ON_PRIMARY, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_FOREGROUND_ON_SUCCESS, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_FOREGROUND_ON_WARNING, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_HEADER_BACKGROUND, Rgba8::rgb(0xf9, 0xf9, 0xf9)),
    (COLOR_HOVER, Rgba8::rgba(0x00, 0x00, 0x00, 0x0f)),
    (COLOR_HYPERLINK, Rgba8::rgb(0x29, 0x6f, 0xf6)),
    (COLOR_INPUT_BACKGROUND, Rgba8::rgb(0xf3, 0xf3, 0xf3)),
    (COLOR_INPUT_BORDER, Rgba8::rgb(0xe3, 0xe3, 0xe3)),
    (COLOR_MENU_BACKGROUND, Rgba8::rgb(0xf5, 0xf5, 0xf5)),
    (COLOR_OVERLAY_BACKGROUND, Rgba8::rgb(0xff, 0xff, 0xff)),
    (COLOR_PLACEHOLDER, Rgba8::rgb(0x88, 0x88, 0x88)),
    (COLOR_PRESSED, Rgba8::rgba(0x00, 0x00, 0x00, 0x19)),
    (COLOR_PRIMARY, Rgba8::rgb(0x29, 0x6f, 0xf6)),
    (COLOR_SCROLL_BAR, Rgba8::rgba(0x00, 0x00, 0x00, 0x99)),
    (COLOR_SCROLL_BAR_BACKGROUND, Rgba8::rgba(0xff, 0xff, 0xff, 0x20)),
    (COLOR_SELECTION, Rgba8::rgba(0x29, 0x6f, 0xf6, 0x40)),
    (COLOR_SEPARATOR, Rgba8::rgb(0xe3, 0xe3, 0xe3)),
    (COLOR_SHADOW, Rgba8::rgba(0x00, 0x00, 0x00, 0x33)),
    (COLOR_SUCCESS, Rgba8::rgb(0x43, 0xf4, 0x36)),
    (COLOR_WARNING, Rgba8::rgb(0xff, 0x98, 0x00)),
];

/// Tables keyed by typed tokens are scanned by their string form
macro_rules! find_token {
    ($table:expr, $name:expr) => {
        $table
            .iter()
            .find(|(token, _)| token.as_str() == $name.as_str())
            .map(|(_, value)| *value)
    };
}
pub(crate) use find_token;

/// The toolkit's own default theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaselineTheme;

impl BaselineTheme {
    /// Palette entry for `name`, or [`UNKNOWN_COLOR`]
    pub fn rgba(&self, name: ColorName<'_>, variant: ThemeVariant) -> Rgba8 {
        let table = match variant {
            ThemeVariant::Dark => DARK_COLORS,
            ThemeVariant::Light => LIGHT_COLORS,
        };
        find_token!(table, name).unwrap_or(UNKNOWN_COLOR)
    }
}

impl Theme for BaselineTheme {
    fn name(&self) -> &'static str {
        "Baseline"
    }

    fn color(&self, name: ColorName<'_>, variant: ThemeVariant) -> Color {
        self.rgba(name, variant).into()
    }

    fn font(&self, style: TextStyle) -> FontResource {
        if style.monospace {
            return MONOSPACE_FONT;
        }
        if style.symbol {
            return SYMBOL_FONT;
        }
        match (style.bold, style.italic) {
            (true, true) => BOLD_ITALIC_FONT,
            (true, false) => BOLD_FONT,
            (false, true) => ITALIC_FONT,
            (false, false) => REGULAR_FONT,
        }
    }

    fn icon(&self, name: IconName<'_>) -> IconResource {
        find_token!(ICONS, name).unwrap_or(MISSING_ICON)
    }

    fn size(&self, name: SizeName<'_>) -> f32 {
        find_token!(SIZES, name).unwrap_or(UNKNOWN_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toolkit_color_is_defined_for_both_variants() {
        for name in ALL_COLOR_NAMES {
            for variant in ThemeVariant::ALL {
                let table = match variant {
                    ThemeVariant::Dark => DARK_COLORS,
                    ThemeVariant::Light => LIGHT_COLORS,
                };
                assert!(
                    find_token!(table, name).is_some(),
                    "baseline {:?} palette is missing {}",
                    variant,
                    name
                );
            }
        }
    }

    #[test]
    fn unknown_tokens_get_documented_defaults() {
        let baseline = BaselineTheme;
        assert_eq!(
            baseline.rgba(ColorName::new("nonexistent"), ThemeVariant::Light),
            UNKNOWN_COLOR
        );
        assert_eq!(baseline.size(SizeName::new("nonexistent")), UNKNOWN_SIZE);
        assert_eq!(baseline.icon(IconName::new("nonexistent")), MISSING_ICON);
    }

    #[test]
    fn fonts_follow_style_flags() {
        let baseline = BaselineTheme;
        assert_eq!(baseline.font(TextStyle::REGULAR), REGULAR_FONT);
        assert_eq!(baseline.font(TextStyle::MONOSPACE), MONOSPACE_FONT);
        assert_eq!(
            baseline.font(TextStyle {
                bold: true,
                italic: true,
                ..TextStyle::REGULAR
            }),
            BOLD_ITALIC_FONT
        );
        assert_eq!(
            baseline.font(TextStyle {
                symbol: true,
                ..TextStyle::REGULAR
            }),
            SYMBOL_FONT
        );
    }

    #[test]
    fn variants_differ_on_background() {
        let baseline = BaselineTheme;
        assert_ne!(
            baseline.rgba(COLOR_BACKGROUND, ThemeVariant::Dark),
            baseline.rgba(COLOR_BACKGROUND, ThemeVariant::Light)
        );
    }
}
