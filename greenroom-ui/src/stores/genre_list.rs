//! Genre selection mirror store
//!
//! Mirrors the form's genre multi-select into a read-only list beside it.

/// State for the mirrored genre list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenreSelection {
    /// Names currently selected in the multi-select
    pub selected: Vec<String>,
}

impl GenreSelection {
    /// The multi-select changed; replace the mirror wholesale.
    pub fn set_selected(&mut self, names: Vec<String>) {
        self.selected = names;
    }

    /// The form was reset.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
