//! Palette-driven theme provider
//!
//! The dark and light Fluent themes share all of their lookup logic; only the
//! constant tables differ. [`FluentTheme`] is generic over a [`Palette`] so a
//! fix to the lookup applies to both variants at once.

use super::baseline::{
    find_token, BaselineTheme, COMPUTER_ICON, FILE_ICON, FOLDER_ICON, MONOSPACE_FONT,
    STORAGE_ICON,
};
use super::color::Rgba8;
use super::core::{Theme, ThemeVariant};
use super::resources::{FontResource, IconResource};
use super::tokens::{
    ColorName, IconName, SizeName, TextStyle, ICON_COMPUTER, ICON_FILE, ICON_FOLDER,
    ICON_STORAGE, SIZE_INLINE_ICON, SIZE_INPUT_BORDER, SIZE_PADDING, SIZE_SCROLL_BAR,
    SIZE_SEPARATOR_THICKNESS,
};
use bevy::color::Color;
use bevy::log::trace;
use std::fmt;
use std::marker::PhantomData;

/// Constant tables backing a [`FluentTheme`]
pub trait Palette: 'static {
    const NAME: &'static str;

    /// Variant the palette was designed for
    const VARIANT: ThemeVariant;

    /// Colors this palette overrides
    const COLORS: &'static [(ColorName<'static>, Rgba8)];

    /// Sizes this palette overrides
    const SIZES: &'static [(SizeName<'static>, f32)];
}

/// Sizes shared by both Fluent palettes
pub const FLUENT_SIZES: &[(SizeName<'static>, f32)] = &[
    (SIZE_PADDING, 8.0),
    (SIZE_INLINE_ICON, 20.0),
    (SIZE_SCROLL_BAR, 12.0),
    (SIZE_SEPARATOR_THICKNESS, 1.0),
    (SIZE_INPUT_BORDER, 1.0),
];

/// Built-in icons the Fluent themes pick explicitly
const ICONS: &[(IconName<'static>, IconResource)] = &[
    (ICON_FOLDER, FOLDER_ICON),
    (ICON_FILE, FILE_ICON),
    (ICON_COMPUTER, COMPUTER_ICON),
    (ICON_STORAGE, STORAGE_ICON),
];

/// Zero-sized theme provider closed over one palette
pub struct FluentTheme<P: Palette> {
    _palette: PhantomData<fn() -> P>,
}

impl<P: Palette> FluentTheme<P> {
    pub const fn new() -> Self {
        Self {
            _palette: PhantomData,
        }
    }

    /// Palette entry for `name`, falling back to the baseline palette
    pub fn rgba(&self, name: ColorName<'_>, variant: ThemeVariant) -> Rgba8 {
        find_token!(P::COLORS, name).unwrap_or_else(|| {
            trace!("{}: no color '{}', using baseline", P::NAME, name);
            BaselineTheme.rgba(name, variant)
        })
    }

    /// Whether the palette itself defines `name`
    pub fn overrides_color(&self, name: ColorName<'_>) -> bool {
        find_token!(P::COLORS, name).is_some()
    }

    pub fn variant(&self) -> ThemeVariant {
        P::VARIANT
    }
}

impl<P: Palette> Default for FluentTheme<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Palette> Clone for FluentTheme<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Palette> Copy for FluentTheme<P> {}

impl<P: Palette> fmt::Debug for FluentTheme<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FluentTheme").field(&P::NAME).finish()
    }
}

impl<P: Palette> Theme for FluentTheme<P> {
    fn name(&self) -> &'static str {
        P::NAME
    }

    fn color(&self, name: ColorName<'_>, variant: ThemeVariant) -> Color {
        self.rgba(name, variant).into()
    }

    fn font(&self, style: TextStyle) -> FontResource {
        if style.monospace {
            MONOSPACE_FONT
        } else {
            BaselineTheme.font(style)
        }
    }

    fn icon(&self, name: IconName<'_>) -> IconResource {
        find_token!(ICONS, name).unwrap_or_else(|| BaselineTheme.icon(name))
    }

    fn size(&self, name: SizeName<'_>) -> f32 {
        find_token!(P::SIZES, name).unwrap_or_else(|| BaselineTheme.size(name))
    }
}
