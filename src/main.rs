//! Album Browser - browse an artist's top albums from Last.fm.
//!
//! A store fetches and decodes albums, a presenter turns them into view
//! models, and the CLI prints them.

pub mod albums;
pub mod artist;
pub mod cli;
pub mod config;
pub mod error;
pub mod strings;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("album_browser=info".parse()?))
        .init();

    cli::run_command(&args)
}
