//! Fluent
//!
//! Windows 11 style dark and light themes for Bevy user interfaces, with a
//! baseline fallback theme and the color bundle used by code editor views.
pub mod core;
pub mod logging;
#[cfg(test)]
mod tests;
pub mod ui;

pub use ui::theme::*;
