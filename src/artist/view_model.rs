//! Display-ready view models for the artist screen.

use reqwest::Url;

use crate::albums::Album;

/// One album row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumViewModel {
    pub title: String,
    pub image_url: Option<Url>,
}

impl From<Album> for AlbumViewModel {
    fn from(album: Album) -> Self {
        Self {
            title: album.name,
            image_url: album.image_url,
        }
    }
}

/// Content for one error presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorViewModel {
    pub title: String,
    pub message: String,
    pub button_titles: Vec<String>,
}

impl ErrorViewModel {
    /// The generic error shown for any failure
    pub fn generic() -> Self {
        use crate::strings::error::{GENERIC_MESSAGE, GENERIC_TITLE, OK_BUTTON_TITLE};

        Self {
            title: GENERIC_TITLE.to_string(),
            message: GENERIC_MESSAGE.to_string(),
            button_titles: vec![OK_BUTTON_TITLE.to_string()],
        }
    }
}
