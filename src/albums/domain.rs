//! Internal domain models for album browsing.
//!
//! These types are OUR types - they don't change when the Last.fm API changes.
//! API responses get converted into these types via the adapter.

use reqwest::Url;

/// An album as shown on the artist screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Album title
    pub name: String,
    /// Cover image (largest size Last.fm offered)
    pub image_url: Option<Url>,
}

impl Album {
    pub fn new(name: impl Into<String>, image_url: Option<Url>) -> Self {
        Self {
            name: name.into(),
            image_url,
        }
    }
}

/// Errors that can occur while fetching albums
///
/// The detail string is diagnostic only; callers branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlbumsStoreError {
    /// The endpoint URL could not be built, nothing was sent
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request was sent but the body was absent or had the wrong shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AlbumsStoreError {
    pub fn invalid_url(detail: impl Into<String>) -> Self {
        Self::InvalidUrl(detail.into())
    }

    pub fn invalid_response(detail: impl Into<String>) -> Self {
        Self::InvalidResponse(detail.into())
    }
}
