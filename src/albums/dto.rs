//! Last.fm API Data Transfer Objects
//!
//! These types match what `artist.gettopalbums` returns.
//! DO NOT use these types outside the albums module - convert to domain types.
//!
//! API Reference: https://www.last.fm/api/show/artist.getTopAlbums
//!
//! The album list is kept as raw JSON objects so that each entry can be
//! converted on its own; one bad entry must not fail the whole page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopAlbumsResponse {
    pub topalbums: TopAlbums,
}

/// The `topalbums` object
///
/// Only the album list is read; sibling keys such as `@attr` paging info are
/// ignored whatever their shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopAlbums {
    /// Album entries, one JSON object each
    pub album: Vec<Map<String, Value>>,
}

/// A single album entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumEntry {
    /// Album title
    pub name: String,
    /// Image list; left untyped so a malformed list only loses the image
    #[serde(default)]
    pub image: Value,
}

/// One sized image
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    /// Image URL (may be empty)
    #[serde(rename = "#text", default)]
    pub url: String,
    /// small, medium, large, extralarge, mega
    #[serde(default)]
    pub size: String,
}

/// Error envelope returned instead of `topalbums`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: i64,
    pub message: String,
}
