//! Logging setup for the inspector binary
//!
//! Library code logs through Bevy's log macros. Inside a Bevy app the
//! `LogPlugin` collects them; the standalone inspector installs a plain
//! `tracing-subscriber` instead.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
#[cfg(debug_assertions)]
pub const DEFAULT_FILTER: &str = "fluent_theme=info";
#[cfg(not(debug_assertions))]
pub const DEFAULT_FILTER: &str = "fluent_theme=warn";

/// Install a stderr subscriber honoring `RUST_LOG`
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
