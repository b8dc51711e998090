use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse artist fixtures: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One artist known to the directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryArtist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub nicknames: Vec<String>,
    #[serde(default)]
    pub group_members: Vec<String>,
}

/// In-memory artist directory backing the dev search endpoint.
///
/// Stands in for the catalog backend's artist search: matches are
/// case-insensitive substring hits on the name, any nickname, or any
/// group member, ordered by edit distance between name and term.
#[derive(Debug, Clone, Default)]
pub struct ArtistDirectory {
    artists: Vec<DirectoryArtist>,
}

impl ArtistDirectory {
    /// Build a directory, dropping any artist whose id was already seen.
    pub fn new(artists: Vec<DirectoryArtist>) -> Self {
        let mut seen = HashSet::new();
        let artists = artists
            .into_iter()
            .filter(|artist| seen.insert(artist.id))
            .collect();
        Self { artists }
    }

    /// Load a directory from a JSON file holding an array of artists.
    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)?;
        let artists: Vec<DirectoryArtist> = serde_json::from_str(&content)?;
        Ok(Self::new(artists))
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Search for artists matching `term`.
    ///
    /// Blank terms match nothing. Results are ordered by Levenshtein
    /// distance from the artist name to the term, ties by name.
    pub fn search(&self, term: &str) -> Vec<DirectoryArtist> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();

        let mut matches: Vec<&DirectoryArtist> = self
            .artists
            .iter()
            .filter(|artist| {
                artist.name.to_lowercase().contains(&needle)
                    || artist
                        .nicknames
                        .iter()
                        .any(|nick| nick.to_lowercase().contains(&needle))
                    || artist
                        .group_members
                        .iter()
                        .any(|member| member.to_lowercase().contains(&needle))
            })
            .collect();
        matches.sort_by(|a, b| {
            let da = strsim::levenshtein(&needle, &a.name.to_lowercase());
            let db = strsim::levenshtein(&needle, &b.name.to_lowercase());
            da.cmp(&db).then_with(|| a.name.cmp(&b.name))
        });
        matches.into_iter().cloned().collect()
    }
}
