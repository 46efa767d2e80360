//! Command line interface for the fluent-theme inspector
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs. The inspector resolves theme tokens exactly the way a running app
//! would, which makes it handy for checking palette values.

use crate::core::config_file::ConfigFile;
use crate::ui::theme_system::ThemeVariant;
use bevy::log::debug;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fluent-theme CLI arguments
///
/// Examples:
///   fluent-theme color background          # Background color of the default theme
///   fluent-theme --theme light color error # Error color of the light theme
///   fluent-theme size scrollbar            # Scrollbar thickness
///   fluent-theme font --monospace          # Font used for fixed-width text
///   fluent-theme editor                    # Code editor palette
///   fluent-theme palette                   # Every toolkit color token
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "fluent-theme",
    version,
    about = "Inspect the Windows 11 style Bevy themes",
    long_about = "Resolves color, size, font and icon tokens against the Fluent dark or light theme, falling back to the toolkit baseline theme for tokens the Fluent palettes do not define."
)]
pub struct CliArgs {
    /// Theme to use
    ///
    /// Available themes: dark (default), light.
    #[clap(
        long = "theme",
        short = 't',
        global = true,
        help = "Theme to use",
        long_help = "Theme to inspect. Available themes: dark (default), light. Overrides default_theme from the settings file."
    )]
    pub theme: Option<String>,

    /// Settings file to read instead of ~/.config/fluent-theme/settings.json
    #[clap(long = "config", short = 'c', global = true, help = "Settings file to read")]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve a color token, e.g. `background` or `primary`
    Color { name: String },
    /// Resolve a size token, e.g. `padding` or `scrollbar`
    Size { name: String },
    /// Resolve an icon token, e.g. `folder`
    Icon { name: String },
    /// Resolve the font for a text style
    Font(FontArgs),
    /// Print the code editor palette
    Editor,
    /// Print every toolkit color token
    Palette,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FontArgs {
    #[clap(long)]
    pub bold: bool,
    #[clap(long)]
    pub italic: bool,
    #[clap(long)]
    pub monospace: bool,
    #[clap(long)]
    pub symbol: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(theme_name) = &self.theme {
            if ThemeVariant::parse(theme_name).is_none() {
                let available_themes = ThemeVariant::all_names().join(", ");
                return Err(format!(
                    "Unknown theme: '{theme_name}'\nAvailable themes: {available_themes}"
                ));
            }
        }

        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(format!(
                    "Settings file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        Ok(())
    }

    fn config_file(&self) -> Option<ConfigFile> {
        match &self.config {
            Some(path) => ConfigFile::load_from(path),
            None => ConfigFile::load(),
        }
    }

    /// Get the theme variant from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--theme)
    /// 2. Config file setting (default_theme)
    /// 3. Built-in default (dark theme)
    pub fn get_theme_variant(&self) -> ThemeVariant {
        if let Some(variant) = self.theme.as_deref().and_then(ThemeVariant::parse) {
            debug!("Using theme from CLI: {}", variant.name());
            return variant;
        }

        if let Some(variant) = self.config_file().and_then(|c| c.theme_variant()) {
            debug!("Using theme from config file: {}", variant.name());
            return variant;
        }

        debug!("Using default theme: dark");
        ThemeVariant::default()
    }
}
