//! Artist presenter - turns albums and errors into view models.
//!
//! The presenter holds its output through a [`Weak`] handle. Whoever owns the
//! output (the view) keeps it alive; once it is dropped, presenting becomes a
//! no-op.

use std::error::Error as StdError;
use std::sync::{Arc, Weak};

use super::view_model::{AlbumViewModel, ErrorViewModel};
use crate::albums::Album;

/// Receives the outcome of an interactor use case
pub trait ArtistInteractorOutput: Send + Sync {
    /// Present a list of albums
    fn present_albums(&self, albums: Vec<Album>);

    /// Present a failure
    fn present_error(&self, error: &dyn StdError);
}

/// Displays what the presenter prepared
pub trait ArtistPresenterOutput: Send + Sync {
    /// Display album view models, in order
    fn display_albums(&self, view_models: Vec<AlbumViewModel>);

    /// Display an error view model
    fn display_error(&self, view_model: ErrorViewModel);
}

pub struct ArtistPresenter {
    output: Weak<dyn ArtistPresenterOutput>,
}

impl ArtistPresenter {
    /// Create a presenter that does not own `output`
    pub fn new(output: &Arc<dyn ArtistPresenterOutput>) -> Self {
        Self {
            output: Arc::downgrade(output),
        }
    }

    /// The output, if it is still alive
    pub fn output(&self) -> Option<Arc<dyn ArtistPresenterOutput>> {
        self.output.upgrade()
    }
}

impl ArtistInteractorOutput for ArtistPresenter {
    fn present_albums(&self, albums: Vec<Album>) {
        let view_models: Vec<AlbumViewModel> =
            albums.into_iter().map(AlbumViewModel::from).collect();

        match self.output() {
            Some(output) => output.display_albums(view_models),
            None => tracing::debug!("Output released, dropping {} album view models", view_models.len()),
        }
    }

    fn present_error(&self, error: &dyn StdError) {
        tracing::debug!("Presenting generic error for: {}", error);

        match self.output() {
            Some(output) => output.display_error(ErrorViewModel::generic()),
            None => tracing::debug!("Output released, dropping error view model"),
        }
    }
}
