//! Demo fixtures for the embedded directory server.
//!
//! Provides a small artist directory so the console runs without a catalog
//! backend.

use std::sync::OnceLock;

use crate::directory::{ArtistDirectory, DirectoryArtist};

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/artists.json");

static DEMO_DIRECTORY: OnceLock<ArtistDirectory> = OnceLock::new();

/// The built-in demo directory, parsed once.
pub fn demo_directory() -> &'static ArtistDirectory {
    DEMO_DIRECTORY.get_or_init(|| {
        let artists: Vec<DirectoryArtist> =
            serde_json::from_str(FIXTURE_JSON).expect("Failed to parse embedded artist fixtures");
        ArtistDirectory::new(artists)
    })
}
