//! Adapter layer: Convert Last.fm DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use reqwest::Url;
use serde_json::{Map, Value};

use super::dto;
use crate::albums::domain::Album;

/// Image sizes from largest to smallest
const SIZE_PREFERENCE: [&str; 5] = ["mega", "extralarge", "large", "medium", "small"];

/// Convert a top albums response into albums, keeping source order.
///
/// Entries that fail conversion are dropped without an error.
pub fn to_albums(response: dto::TopAlbumsResponse) -> Vec<Album> {
    let total = response.topalbums.album.len();

    let albums: Vec<Album> = response
        .topalbums
        .album
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let album = to_album(entry);
            if album.is_none() {
                tracing::debug!("Dropping album entry {} (no usable name)", index);
            }
            album
        })
        .collect();

    let dropped = total - albums.len();
    if dropped > 0 {
        tracing::warn!("Dropped {} of {} album entries that failed conversion", dropped, total);
    }

    albums
}

/// Convert one raw album object, or `None` if it has no string `name`
pub fn to_album(entry: Map<String, Value>) -> Option<Album> {
    let entry: dto::AlbumEntry = serde_json::from_value(Value::Object(entry)).ok()?;
    let image_url = best_image_url(entry.image);
    Some(Album::new(entry.name, image_url))
}

/// Pick the largest image with a parseable absolute URL.
///
/// A malformed image list yields `None` rather than failing the album.
fn best_image_url(images: Value) -> Option<Url> {
    let images: Vec<dto::Image> = serde_json::from_value(images).ok()?;

    images
        .into_iter()
        .filter(|image| !image.url.is_empty())
        .filter_map(|image| {
            let url = Url::parse(&image.url).ok()?;
            Some((size_rank(&image.size), url))
        })
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, url)| url)
}

fn size_rank(size: &str) -> usize {
    SIZE_PREFERENCE
        .iter()
        .position(|s| *s == size)
        .unwrap_or(SIZE_PREFERENCE.len())
}
