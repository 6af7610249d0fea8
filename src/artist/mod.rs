//! Artist screen logic: the interactor drives the albums store and the
//! presenter turns the outcome into view models for a display output.

mod interactor;
mod presenter;
mod view_model;

pub use interactor::ArtistInteractor;
pub use presenter::{ArtistInteractorOutput, ArtistPresenter, ArtistPresenterOutput};
pub use view_model::{AlbumViewModel, ErrorViewModel};
