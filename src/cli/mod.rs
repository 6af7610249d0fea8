//! Command-line interface for album-browser.
//!
//! This module provides CLI commands for browsing an artist's top albums
//! and inspecting the effective configuration.

mod commands;
mod console;

pub use commands::{Cli, Commands, run_command};
pub use console::ConsoleOutput;
