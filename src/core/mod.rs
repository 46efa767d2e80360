//! Core application functionality
//!
//! This module contains the inspector's outer layers:
//! - CLI handling
//! - User settings file
//! - Running a command and reporting errors

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
