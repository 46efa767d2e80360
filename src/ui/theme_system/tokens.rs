//! Theme tokens
//!
//! Names the toolkit uses to ask a theme for a color, size or icon, plus the
//! text style descriptor used for font lookups. Names are open: any string is
//! a valid token, and names no theme recognizes resolve through the baseline
//! fallback. The constants below are the set the toolkit itself asks for.

use std::fmt;

macro_rules! token_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(&'a str);

        impl<'a> $name<'a> {
            pub const fn new(name: &'a str) -> Self {
                Self(name)
            }

            pub const fn as_str(&self) -> &'a str {
                self.0
            }
        }

        impl<'a> From<&'a str> for $name<'a> {
            fn from(name: &'a str) -> Self {
                Self(name)
            }
        }

        impl fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

token_type!(
    /// Semantic UI color role, e.g. `background` or `primary`
    ColorName
);
token_type!(
    /// Named UI dimension, e.g. `padding` or `scrollbar`
    SizeName
);
token_type!(
    /// Named built-in icon, e.g. `folder`
    IconName
);

// =================================================================
// COLOR TOKENS
// =================================================================

pub const COLOR_BACKGROUND: ColorName<'static> = ColorName::new("background");
pub const COLOR_BUTTON: ColorName<'static> = ColorName::new("button");
pub const COLOR_DISABLED_BUTTON: ColorName<'static> = ColorName::new("disabledButton");
pub const COLOR_DISABLED: ColorName<'static> = ColorName::new("disabled");
pub const COLOR_ERROR: ColorName<'static> = ColorName::new("error");
pub const COLOR_FOCUS: ColorName<'static> = ColorName::new("focus");
pub const COLOR_FOREGROUND: ColorName<'static> = ColorName::new("foreground");
pub const COLOR_FOREGROUND_ON_ERROR: ColorName<'static> = ColorName::new("foregroundOnError");
pub const COLOR_FOREGROUND_ON_PRIMARY: ColorName<'static> = ColorName::new("foregroundOnPrimary");
pub const COLOR_FOREGROUND_ON_SUCCESS: ColorName<'static> = ColorName::new("foregroundOnSuccess");
pub const COLOR_FOREGROUND_ON_WARNING: ColorName<'static> = ColorName::new("foregroundOnWarning");
pub const COLOR_HEADER_BACKGROUND: ColorName<'static> = ColorName::new("headerBackground");
pub const COLOR_HOVER: ColorName<'static> = ColorName::new("hover");
pub const COLOR_HYPERLINK: ColorName<'static> = ColorName::new("hyperlink");
pub const COLOR_INPUT_BACKGROUND: ColorName<'static> = ColorName::new("inputBackground");
pub const COLOR_INPUT_BORDER: ColorName<'static> = ColorName::new("inputBorder");
pub const COLOR_MENU_BACKGROUND: ColorName<'static> = ColorName::new("menuBackground");
pub const COLOR_OVERLAY_BACKGROUND: ColorName<'static> = ColorName::new("overlayBackground");
pub const COLOR_PLACEHOLDER: ColorName<'static> = ColorName::new("placeholder");
pub const COLOR_PRESSED: ColorName<'static> = ColorName::new("pressed");
pub const COLOR_PRIMARY: ColorName<'static> = ColorName::new("primary");
pub const COLOR_SCROLL_BAR: ColorName<'static> = ColorName::new("scrollBar");
pub const COLOR_SCROLL_BAR_BACKGROUND: ColorName<'static> = ColorName::new("scrollBarBackground");
pub const COLOR_SELECTION: ColorName<'static> = ColorName::new("selection");
pub const COLOR_SEPARATOR: ColorName<'static> = ColorName::new("separator");
pub const COLOR_SHADOW: ColorName<'static> = ColorName::new("shadow");
pub const COLOR_SUCCESS: ColorName<'static> = ColorName::new("success");
pub const COLOR_WARNING: ColorName<'static> = ColorName::new("warning");

/// Every color token the toolkit asks for, in display order
pub const ALL_COLOR_NAMES: &[ColorName<'static>] = &[
    COLOR_BACKGROUND,
    COLOR_BUTTON,
    COLOR_DISABLED_BUTTON,
    COLOR_DISABLED,
    COLOR_ERROR,
    COLOR_FOCUS,
    COLOR_FOREGROUND,
    COLOR_FOREGROUND_ON_ERROR,
    COLOR_FOREGROUND_ON_PRIMARY,
    COLOR_FOREGROUND_ON_SUCCESS,
    COLOR_FOREGROUND_ON_WARNING,
    COLOR_HEADER_BACKGROUND,
    COLOR_HOVER,
    COLOR_HYPERLINK,
    COLOR_INPUT_BACKGROUND,
    COLOR_INPUT_BORDER,
    COLOR_MENU_BACKGROUND,
    COLOR_OVERLAY_BACKGROUND,
    COLOR_PLACEHOLDER,
    COLOR_PRESSED,
    COLOR_PRIMARY,
    COLOR_SCROLL_BAR,
    COLOR_SCROLL_BAR_BACKGROUND,
    COLOR_SELECTION,
    COLOR_SEPARATOR,
    COLOR_SHADOW,
    COLOR_SUCCESS,
    COLOR_WARNING,
];

// =================================================================
// SIZE TOKENS
// =================================================================

pub const SIZE_PADDING: SizeName<'static> = SizeName::new("padding");
pub const SIZE_INLINE_ICON: SizeName<'static> = SizeName::new("inlineIcon");
pub const SIZE_SCROLL_BAR: SizeName<'static> = SizeName::new("scrollbar");
pub const SIZE_SCROLL_BAR_SMALL: SizeName<'static> = SizeName::new("scrollbarSmall");
pub const SIZE_SEPARATOR_THICKNESS: SizeName<'static> = SizeName::new("separatorThickness");
pub const SIZE_INPUT_BORDER: SizeName<'static> = SizeName::new("inputBorder");
pub const SIZE_INPUT_RADIUS: SizeName<'static> = SizeName::new("inputRadius");
pub const SIZE_SELECTION_RADIUS: SizeName<'static> = SizeName::new("selectionRadius");
pub const SIZE_INNER_PADDING: SizeName<'static> = SizeName::new("innerPadding");
pub const SIZE_LINE_SPACING: SizeName<'static> = SizeName::new("lineSpacing");
pub const SIZE_TEXT: SizeName<'static> = SizeName::new("text");
pub const SIZE_HEADING_TEXT: SizeName<'static> = SizeName::new("headingText");
pub const SIZE_SUB_HEADING_TEXT: SizeName<'static> = SizeName::new("subHeadingText");
pub const SIZE_CAPTION_TEXT: SizeName<'static> = SizeName::new("captionText");

// =================================================================
// ICON TOKENS
// =================================================================

pub const ICON_FOLDER: IconName<'static> = IconName::new("folder");
pub const ICON_FOLDER_OPEN: IconName<'static> = IconName::new("folderOpen");
pub const ICON_FILE: IconName<'static> = IconName::new("file");
pub const ICON_COMPUTER: IconName<'static> = IconName::new("computer");
pub const ICON_STORAGE: IconName<'static> = IconName::new("storage");
pub const ICON_HOME: IconName<'static> = IconName::new("home");
pub const ICON_DOCUMENT: IconName<'static> = IconName::new("document");
pub const ICON_CANCEL: IconName<'static> = IconName::new("cancel");
pub const ICON_CONFIRM: IconName<'static> = IconName::new("confirm");
pub const ICON_DELETE: IconName<'static> = IconName::new("delete");
pub const ICON_SEARCH: IconName<'static> = IconName::new("search");
pub const ICON_SETTINGS: IconName<'static> = IconName::new("settings");
pub const ICON_MENU: IconName<'static> = IconName::new("menu");
pub const ICON_INFO: IconName<'static> = IconName::new("info");
pub const ICON_ERROR: IconName<'static> = IconName::new("error");
pub const ICON_WARNING: IconName<'static> = IconName::new("warning");
pub const ICON_QUESTION: IconName<'static> = IconName::new("question");

/// Text style descriptor passed to font lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    /// Fixed-width rendering
    pub monospace: bool,
    pub symbol: bool,
}

impl TextStyle {
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
        monospace: false,
        symbol: false,
    };

    pub const MONOSPACE: Self = Self {
        monospace: true,
        ..Self::REGULAR
    };

    pub const BOLD: Self = Self {
        bold: true,
        ..Self::REGULAR
    };

    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::REGULAR
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_built_at_runtime_match_constants() {
        let owned = String::from("background");
        assert_eq!(ColorName::from(owned.as_str()), COLOR_BACKGROUND);
        assert_eq!(SizeName::new("scrollbar"), SIZE_SCROLL_BAR);
        assert_eq!(ICON_FOLDER.to_string(), "folder");
    }

    #[test]
    fn color_names_are_unique() {
        let mut names: Vec<_> = ALL_COLOR_NAMES.iter().map(|n| n.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
