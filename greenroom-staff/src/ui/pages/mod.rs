pub mod album_form;
pub mod artist_form;

pub use album_form::AlbumForm;
pub use artist_form::ArtistForm;
