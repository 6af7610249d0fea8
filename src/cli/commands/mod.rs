//! CLI command definitions and dispatch.
//!
//! - `albums`: fetching and showing an artist's top albums, plus config inspection

mod albums;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use albums::{cmd_config, cmd_top_albums};

/// Album Browser CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show an artist's top albums from Last.fm
    TopAlbums {
        /// MusicBrainz ID of the artist
        artist_id: String,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
        /// Override the Last.fm API root URL
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Show the config file location and effective settings
    Config,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::TopAlbums {
            artist_id,
            api_key,
            base_url,
        } => {
            let rt = Runtime::new()?;
            cmd_top_albums(&rt, artist_id, api_key.as_deref(), base_url.as_deref())
        }
        Commands::Config => cmd_config(),
    }
}
