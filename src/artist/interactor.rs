//! Artist interactor - runs the "show top albums" use case.

use std::sync::Arc;

use super::presenter::ArtistInteractorOutput;
use crate::albums::AlbumsStore;

pub struct ArtistInteractor {
    store: Arc<dyn AlbumsStore>,
    output: Arc<dyn ArtistInteractorOutput>,
}

impl ArtistInteractor {
    pub fn new(store: Arc<dyn AlbumsStore>, output: Arc<dyn ArtistInteractorOutput>) -> Self {
        Self { store, output }
    }

    /// Fetch an artist's albums and hand the outcome to the output once
    pub async fn fetch_albums(&self, artist_id: &str) {
        let output = Arc::clone(&self.output);

        self.store
            .fetch_albums(
                artist_id,
                Box::new(move |result| match result {
                    Ok(albums) => output.present_albums(albums),
                    Err(error) => output.present_error(&error),
                }),
            )
            .await;
    }
}
