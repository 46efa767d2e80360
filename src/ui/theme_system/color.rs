//! Palette color values
//!
//! Palettes are written as 8-bit sRGB literals so every table entry can be a
//! `const`. Lookups hand them to Bevy as [`Color`].

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use std::fmt;

/// RGBA color, 0-255 per channel, non-premultiplied sRGB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Read the channels back out of a Bevy color
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_srgba().to_u8_array();
        Self { r, g, b, a }
    }

    /// `#rrggbbaa`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba8> for Color {
    fn from(value: Rgba8) -> Self {
        Color::srgba_u8(value.r, value.g, value.b, value.a)
    }
}

impl From<Color> for Rgba8 {
    fn from(value: Color) -> Self {
        Rgba8::from_color(value)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
