//! Display types for UI components
//!
//! Lightweight versions of catalog records, containing only the fields the
//! staff forms need for display. They enable props-based components that
//! work with either real or demo data.

use chrono::NaiveDate;

/// Artist display info
#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

/// Album kind as the catalog stores it: full-length, EP, or single.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AlbumKind {
    #[default]
    Lp,
    Ep,
    Single,
}

impl AlbumKind {
    /// Catalog code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            AlbumKind::Lp => "LP",
            AlbumKind::Ep => "EP",
            AlbumKind::Single => "S",
        }
    }

    pub fn from_code(code: &str) -> Option<AlbumKind> {
        match code {
            "LP" => Some(AlbumKind::Lp),
            "EP" => Some(AlbumKind::Ep),
            "S" => Some(AlbumKind::Single),
            _ => None,
        }
    }

    /// The `(is_ep, is_single)` flag pair the form persists.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            AlbumKind::Lp => (false, false),
            AlbumKind::Ep => (true, false),
            AlbumKind::Single => (false, true),
        }
    }

    pub fn from_flags(is_ep: bool, is_single: bool) -> AlbumKind {
        if is_single {
            AlbumKind::Single
        } else if is_ep {
            AlbumKind::Ep
        } else {
            AlbumKind::Lp
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlbumKind::Lp => "Album",
            AlbumKind::Ep => "EP",
            AlbumKind::Single => "Single",
        }
    }
}

/// Long human-readable release date, e.g. "Fri Mar 14 2025".
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
