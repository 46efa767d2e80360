//! Inspector for the Windows 11 style Bevy themes.

use anyhow::Result;
use fluent_theme::{core, logging};

fn run(cli_args: core::CliArgs) -> Result<()> {
    logging::init()?;
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = run(cli_args) {
        core::platform::handle_error(error);
    }
}
