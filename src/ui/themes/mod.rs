//! Theme definitions
//!
//! The Windows 11 style dark and light palettes. The machinery that serves
//! them lives in `../theme_system/`.
//!
//! ## Theme Structure
//!
//! Each palette module holds:
//! - **UI palette**: one constant per color token the palette overrides
//! - **Sizes**: padding, icon and border dimensions (shared by both variants)
//! - **Editor palette**: the twelve code editor colors
//!
//! Tokens a palette leaves out resolve through the toolkit baseline theme.

pub mod dark;
pub mod light;

pub use dark::{DarkPalette, DarkTheme};
pub use light::{LightPalette, LightTheme};
