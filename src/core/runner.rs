//! Inspector runner logic
//!
//! Resolves the requested token against the selected theme and prints it.

use crate::core::cli::{CliArgs, Command, FontArgs};
use crate::ui::theme_system::tokens::ALL_COLOR_NAMES;
use crate::ui::theme_system::{
    ColorName, CurrentTheme, IconName, Rgba8, SizeName, TextStyle,
};
use anyhow::Result;
use std::fmt::Write;

/// Run the inspector with the given CLI arguments
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let current_theme = CurrentTheme::new(cli_args.get_theme_variant());
    tracing::info!(
        theme = current_theme.theme().name(),
        command = ?cli_args.command,
        "resolving"
    );

    print!("{}", render(&cli_args.command, &current_theme)?);
    Ok(())
}

/// Output for `command` under `current_theme`
pub fn render(command: &Command, current_theme: &CurrentTheme) -> Result<String> {
    let theme = current_theme.theme();
    let mut out = String::new();

    match command {
        Command::Color { name } => {
            let color = current_theme.color(ColorName::new(name));
            writeln!(out, "{}", Rgba8::from(color))?;
        }
        Command::Size { name } => {
            writeln!(out, "{}", theme.size(SizeName::new(name)))?;
        }
        Command::Icon { name } => {
            writeln!(out, "{}", theme.icon(IconName::new(name)).path())?;
        }
        Command::Font(args) => {
            writeln!(out, "{}", theme.font(text_style(args)).path())?;
        }
        Command::Editor => {
            for (role, color) in current_theme.editor_colors().roles() {
                writeln!(out, "{:<16}{}", role, Rgba8::from(color))?;
            }
        }
        Command::Palette => {
            for name in ALL_COLOR_NAMES {
                let color = current_theme.color(*name);
                writeln!(out, "{:<22}{}", name.as_str(), Rgba8::from(color))?;
            }
        }
    }

    Ok(out)
}

fn text_style(args: &FontArgs) -> TextStyle {
    TextStyle {
        bold: args.bold,
        italic: args.italic,
        monospace: args.monospace,
        symbol: args.symbol,
    }
}
