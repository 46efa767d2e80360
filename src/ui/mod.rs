//! User interface theming for Bevy apps

pub mod theme;
pub mod theme_system;
pub mod themes;
