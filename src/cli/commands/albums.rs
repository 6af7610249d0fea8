//! Top albums and configuration commands.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::albums::{AlbumsApiStore, HttpNetworkClient};
use crate::artist::{ArtistInteractor, ArtistPresenter, ArtistPresenterOutput};
use crate::cli::ConsoleOutput;
use crate::config::{self, Config, ConfigError};
use crate::error::{Error, ResultExt};

/// Fetch and print an artist's top albums
pub fn cmd_top_albums(
    rt: &Runtime,
    artist_id: &str,
    api_key: Option<&str>,
    base_url: Option<&str>,
) -> anyhow::Result<()> {
    let config = with_overrides(config::load(), api_key, base_url);

    let store_config = config
        .store_config()
        .ok_or(Error::Config(ConfigError::MissingApiKey))?;
    let network = HttpNetworkClient::new(config.timeout()).with_context("creating HTTP client")?;
    let store = Arc::new(AlbumsApiStore::new(Arc::new(network), store_config));

    // The command owns the view; the presenter only borrows it weakly
    let console = Arc::new(ConsoleOutput::new());
    let view: Arc<dyn ArtistPresenterOutput> = console.clone();
    let presenter = Arc::new(ArtistPresenter::new(&view));
    let interactor = ArtistInteractor::new(store, presenter);

    println!("Top albums for {}", artist_id);
    println!();

    rt.block_on(interactor.fetch_albums(artist_id));

    if console.error_shown() {
        anyhow::bail!("Could not load albums for artist {}", artist_id);
    }
    Ok(())
}

/// Print the config path and effective settings
pub fn cmd_config() -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not created, using defaults)", path.display()),
        None => println!("Config file: (no config directory on this platform)"),
    }

    let config = config::load();
    println!();
    println!("  Base URL: {}", config.api.base_url);
    match config.timeout() {
        Some(timeout) => println!("  Timeout:  {}s", timeout.as_secs()),
        None => println!("  Timeout:  none"),
    }
    println!("  API key:  {}", config.masked_api_key());

    Ok(())
}

/// Apply command-line overrides on top of the loaded config
fn with_overrides(mut config: Config, api_key: Option<&str>, base_url: Option<&str>) -> Config {
    if let Some(key) = api_key {
        config.credentials.lastfm_api_key = Some(key.to_string());
    }
    if let Some(url) = base_url {
        config.api.base_url = url.to_string();
    }
    config
}
