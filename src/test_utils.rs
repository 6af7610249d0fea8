//! Test utilities and fixtures for album-browser tests.
//!
//! Mocks for every injected collaborator plus JSON body builders, so tests
//! can count calls and inspect what was displayed.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{CompletionRecorder, MockNetworkClient, top_albums_body};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let network = Arc::new(MockNetworkClient::responding(HttpResponse::ok(top_albums_body(vec![]))));
//!     let recorder = CompletionRecorder::new();
//!     store.fetch_albums("id", recorder.completion()).await;
//!     assert_eq!(recorder.calls(), 1);
//! }
//! ```

use std::error::Error as StdError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::albums::{
    Album, AlbumsCompletion, AlbumsStore, AlbumsStoreError, HttpResponse, JsonRequest,
    NetworkClient, NetworkError,
};
use crate::artist::{AlbumViewModel, ArtistInteractorOutput, ArtistPresenterOutput, ErrorViewModel};

// ============================================================================
// JSON fixtures
// ============================================================================

/// A Last.fm album object with an optional extralarge image
pub fn album_json(name: &str, image_url: Option<&str>) -> Value {
    let mut images = vec![json!({"#text": "", "size": "small"})];
    if let Some(url) = image_url {
        images.push(json!({"#text": url, "size": "extralarge"}));
    }

    json!({
        "name": name,
        "playcount": 1000,
        "url": format!("https://www.last.fm/music/Test/{}", name),
        "artist": {"name": "Test Artist", "mbid": "test-artist", "url": "https://www.last.fm/music/Test"},
        "image": images
    })
}

/// A full top albums body wrapping `albums`
pub fn top_albums_body(albums: Vec<Value>) -> String {
    let total = albums.len().to_string();
    json!({
        "topalbums": {
            "album": albums,
            "@attr": {"artist": "Test Artist", "page": "1", "perPage": "50", "totalPages": "1", "total": total}
        }
    })
    .to_string()
}

// ============================================================================
// Network
// ============================================================================

/// Mock network client returning a fixed outcome and recording requests
pub struct MockNetworkClient {
    outcome: Result<HttpResponse, NetworkError>,
    requests: Mutex<Vec<JsonRequest>>,
}

impl MockNetworkClient {
    pub fn responding(response: HttpResponse) -> Self {
        Self {
            outcome: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: NetworkError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<JsonRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl NetworkClient for MockNetworkClient {
    async fn send_request(&self, request: JsonRequest) -> Result<HttpResponse, NetworkError> {
        self.requests.lock().push(request);
        self.outcome.clone()
    }
}

// ============================================================================
// Store
// ============================================================================

/// Counts completion calls and keeps the last result
#[derive(Clone, Default)]
pub struct CompletionRecorder {
    calls: Arc<AtomicUsize>,
    result: Arc<Mutex<Option<Result<Vec<Album>, AlbumsStoreError>>>>,
}

impl CompletionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completion(&self) -> AlbumsCompletion {
        let recorder = self.clone();
        Box::new(move |result| {
            recorder.calls.fetch_add(1, Ordering::SeqCst);
            *recorder.result.lock() = Some(result);
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn result(&self) -> Option<Result<Vec<Album>, AlbumsStoreError>> {
        self.result.lock().clone()
    }
}

/// Mock store completing with a fixed outcome
pub struct MockAlbumsStore {
    outcome: Result<Vec<Album>, AlbumsStoreError>,
    requested: Mutex<Vec<String>>,
}

impl MockAlbumsStore {
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            outcome: Ok(albums),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(error: AlbumsStoreError) -> Self {
        Self {
            outcome: Err(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl AlbumsStore for MockAlbumsStore {
    async fn fetch_albums(&self, artist_id: &str, completion: AlbumsCompletion) {
        self.requested.lock().push(artist_id.to_string());
        completion(self.outcome.clone());
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// What a presenter output was asked to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Displayed {
    Albums(Vec<AlbumViewModel>),
    Error(ErrorViewModel),
}

/// Presenter output that records every display call
#[derive(Default)]
pub struct RecordingPresenterOutput {
    displayed: Mutex<Vec<Displayed>>,
}

impl RecordingPresenterOutput {
    pub fn displayed(&self) -> Vec<Displayed> {
        self.displayed.lock().clone()
    }
}

impl ArtistPresenterOutput for RecordingPresenterOutput {
    fn display_albums(&self, view_models: Vec<AlbumViewModel>) {
        self.displayed.lock().push(Displayed::Albums(view_models));
    }

    fn display_error(&self, view_model: ErrorViewModel) {
        self.displayed.lock().push(Displayed::Error(view_model));
    }
}

/// What an interactor output was asked to present (album names or error text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presented {
    Albums(Vec<String>),
    Error(String),
}

/// Interactor output that records every present call
#[derive(Default)]
pub struct RecordingInteractorOutput {
    presented: Mutex<Vec<Presented>>,
}

impl RecordingInteractorOutput {
    pub fn presented(&self) -> Vec<Presented> {
        self.presented.lock().clone()
    }
}

impl ArtistInteractorOutput for RecordingInteractorOutput {
    fn present_albums(&self, albums: Vec<Album>) {
        let names = albums.into_iter().map(|a| a.name).collect();
        self.presented.lock().push(Presented::Albums(names));
    }

    fn present_error(&self, error: &dyn StdError) {
        self.presented.lock().push(Presented::Error(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_albums_body_shape() {
        let body = top_albums_body(vec![album_json("A", Some("https://img.example.com/a.png"))]);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["topalbums"]["album"][0]["name"], "A");
        assert_eq!(value["topalbums"]["@attr"]["total"], "1");
    }

    #[test]
    fn test_completion_recorder_counts_calls() {
        let recorder = CompletionRecorder::new();
        assert_eq!(recorder.calls(), 0);
        assert!(recorder.result().is_none());

        (recorder.completion())(Ok(vec![]));

        assert_eq!(recorder.calls(), 1);
        assert_eq!(recorder.result(), Some(Ok(vec![])));
    }

    #[tokio::test]
    async fn test_mock_network_records_requests() {
        let mock = MockNetworkClient::failing(NetworkError::Request("down".to_string()));
        let url = reqwest::Url::parse("http://lastfm.test/").unwrap();

        let result = mock.send_request(JsonRequest::new(url.clone())).await;

        assert!(result.is_err());
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_request().map(|r| r.url), Some(url));
    }
}
