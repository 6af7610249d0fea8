//! Terminal display output for the artist presenter.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::artist::{AlbumViewModel, ArtistPresenterOutput, ErrorViewModel};
use crate::strings;

/// Prints view models to stdout/stderr and remembers whether an error was shown
#[derive(Default)]
pub struct ConsoleOutput {
    error_shown: AtomicBool,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `display_error` has been called
    pub fn error_shown(&self) -> bool {
        self.error_shown.load(Ordering::SeqCst)
    }
}

impl ArtistPresenterOutput for ConsoleOutput {
    fn display_albums(&self, view_models: Vec<AlbumViewModel>) {
        print!("{}", render_albums(&view_models));
    }

    fn display_error(&self, view_model: ErrorViewModel) {
        self.error_shown.store(true, Ordering::SeqCst);
        eprint!("{}", render_error(&view_model));
    }
}

/// Numbered album list, one album per line with its image below
pub fn render_albums(view_models: &[AlbumViewModel]) -> String {
    if view_models.is_empty() {
        return format!("{}\n", strings::artist::NO_ALBUMS);
    }

    let width = view_models.len().to_string().len();
    let mut out = String::new();
    for (index, album) in view_models.iter().enumerate() {
        let image = album
            .image_url
            .as_ref()
            .map(|url| url.as_str())
            .unwrap_or(strings::artist::NO_IMAGE);
        out.push_str(&format!("{:>width$}. {}\n", index + 1, album.title, width = width));
        out.push_str(&format!("{:>width$}  {}\n", "", image, width = width));
    }
    out
}

/// Error title, message and button row
pub fn render_error(view_model: &ErrorViewModel) -> String {
    let buttons = view_model
        .button_titles
        .iter()
        .map(|title| format!("[{}]", title))
        .collect::<Vec<_>>()
        .join(" ");
    format!("✗ {}\n  {}\n  {}\n", view_model.title, view_model.message, buttons)
}
