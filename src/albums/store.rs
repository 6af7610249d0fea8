//! Albums store - fetches an artist's top albums from Last.fm
//!
//! The store builds the endpoint URL, sends one request through the injected
//! [`NetworkClient`], decodes the body and hands the outcome to a completion
//! that runs exactly once.

use std::sync::Arc;

use async_trait::async_trait;

use super::adapter;
use super::domain::{Album, AlbumsStoreError};
use super::dto;
use super::endpoint::{DEFAULT_BASE_URL, LastFmEndpoint};
use super::network::{JsonRequest, NetworkClient};

/// Page size for top albums
pub const TOP_ALBUMS_LIMIT: u32 = 50;

/// Single-fire completion for a fetch
pub type AlbumsCompletion = Box<dyn FnOnce(Result<Vec<Album>, AlbumsStoreError>) + Send>;

/// Something that can fetch an artist's albums.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait AlbumsStore: Send + Sync {
    /// Fetch the top albums for an artist and call `completion` once with the outcome.
    async fn fetch_albums(&self, artist_id: &str, completion: AlbumsCompletion);
}

/// Settings for [`AlbumsApiStore`]
#[derive(Debug, Clone)]
pub struct AlbumsStoreConfig {
    /// Last.fm API root
    pub base_url: String,
    /// Last.fm API key
    pub api_key: String,
}

impl Default for AlbumsStoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Last.fm-backed albums store
pub struct AlbumsApiStore {
    network_client: Arc<dyn NetworkClient>,
    config: AlbumsStoreConfig,
}

impl AlbumsApiStore {
    pub fn new(network_client: Arc<dyn NetworkClient>, config: AlbumsStoreConfig) -> Self {
        Self {
            network_client,
            config,
        }
    }

    /// Fetch albums and return the outcome directly
    async fn load_albums(&self, artist_id: &str) -> Result<Vec<Album>, AlbumsStoreError> {
        let endpoint = LastFmEndpoint::top_albums(artist_id, TOP_ALBUMS_LIMIT);
        let url = endpoint
            .url(&self.config.base_url, &self.config.api_key)
            .ok_or_else(|| {
                AlbumsStoreError::invalid_url(format!(
                    "cannot build {} URL from base {:?}",
                    endpoint.method(),
                    self.config.base_url
                ))
            })?;

        tracing::debug!(
            "Requesting {} for artist {:?} (limit {})",
            endpoint.method(),
            artist_id,
            TOP_ALBUMS_LIMIT
        );

        let response = self
            .network_client
            .send_request(JsonRequest::new(url))
            .await
            .map_err(|e| AlbumsStoreError::invalid_response(e.to_string()))?;

        decode_albums(&response.body)
    }
}

#[async_trait]
impl AlbumsStore for AlbumsApiStore {
    async fn fetch_albums(&self, artist_id: &str, completion: AlbumsCompletion) {
        let result = self.load_albums(artist_id).await;

        match &result {
            Ok(albums) => tracing::info!("Fetched {} albums for artist {:?}", albums.len(), artist_id),
            Err(e) => tracing::warn!("Fetching albums for artist {:?} failed: {}", artist_id, e),
        }

        completion(result);
    }
}

/// Decode a top albums body.
///
/// The whole body fails only when the outer shape is wrong; individual
/// album entries that fail conversion are dropped.
pub fn decode_albums(body: &[u8]) -> Result<Vec<Album>, AlbumsStoreError> {
    if body.is_empty() {
        return Err(AlbumsStoreError::invalid_response("empty body"));
    }

    match serde_json::from_slice::<dto::TopAlbumsResponse>(body) {
        Ok(response) => Ok(adapter::to_albums(response)),
        Err(e) => {
            // Last.fm reports failures in-band with an error envelope
            if let Ok(api_error) = serde_json::from_slice::<dto::ApiError>(body) {
                return Err(AlbumsStoreError::invalid_response(format!(
                    "Last.fm error {}: {}",
                    api_error.error, api_error.message
                )));
            }
            Err(AlbumsStoreError::invalid_response(e.to_string()))
        }
    }
}
