//! User-facing strings.

pub mod error {
    pub const GENERIC_TITLE: &str = "Something went wrong";
    pub const GENERIC_MESSAGE: &str = "We couldn't load this artist's albums. Please try again later.";
    pub const OK_BUTTON_TITLE: &str = "OK";
}

pub mod artist {
    pub const NO_ALBUMS: &str = "No albums found.";
    pub const NO_IMAGE: &str = "(no image)";
}
