//! Artist picker state store
//!
//! State machine for the "select artists" modal on the album and artist
//! forms. One instance per modal on the page, keyed by a namespace prefix.
//! Views render this state and never own it; every mutation goes through
//! [`ArtistPickerState::dispatch`].

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::display_types::Artist;

// ============================================================================
// State Machine Types
// ============================================================================

/// Phase of the results area inside the picker modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchPhase {
    /// Nothing searched yet, or results cleared on close
    #[default]
    Idle,
    /// Request in flight, loading indicator visible
    Searching,
    /// Hits offered for staging (filtered against staged at arrival)
    Results(Vec<Artist>),
    /// The query matched nothing stageable
    NoMatches(String),
    /// Request failed; localized message shown in place of results
    Failed(String),
}

/// Per-instance selection state for one picker modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistSelection {
    /// Artist set as it existed when the instance was registered
    pub original: Vec<Artist>,
    /// Current in-modal selection
    pub staged: Vec<Artist>,
    /// Last committed snapshot, written to the form on save
    pub saved: Vec<Artist>,
    /// True once `staged` has diverged from `original` via a mutation
    pub edited: bool,
    /// True iff `saved` was produced from the current `staged` with no
    /// further edits
    pub confirmed: bool,
    /// Hidden-field value: `""` untouched, `"0"` explicitly cleared,
    /// otherwise comma-joined ids
    pub form_value: String,
    /// Whether the modal is currently visible
    pub is_open: bool,
    /// How many times the modal has been opened
    pub open_turns: u32,
    /// Search box contents
    pub query: String,
    /// Monotonic token identifying the latest search request
    pub search_turn: u64,
    /// Results area phase
    pub search: SearchPhase,
    /// Post-close unsaved-changes warning
    pub not_saved: bool,
}

// ============================================================================
// Event Types
// ============================================================================

/// Events that can be dispatched to a picker instance
#[derive(Clone, Debug)]
pub enum PickerEvent {
    /// Modal became visible
    Open,
    /// User edits the search box
    SetQuery(String),
    /// A search request was sent (async operation started)
    SearchStarted,
    /// Search completed (from async operation). `turn` is the token the
    /// request was started with; stale completions are dropped.
    SearchComplete {
        turn: u64,
        hits: Vec<Artist>,
        error: Option<String>,
    },
    /// User stages a hit from the results list
    StageHit(i64),
    /// User removes a staged artist
    RemoveStaged(i64),
    /// User commits the staged selection
    Save,
    /// User reverts to the selection captured at registration
    Reset,
    /// Modal was dismissed
    Close,
}

// ============================================================================
// State Machine Implementation
// ============================================================================

impl ArtistSelection {
    fn new(original: Vec<Artist>) -> Self {
        Self {
            staged: original.clone(),
            original,
            ..Self::default()
        }
    }

    /// Ids of the staged artists, in staging order.
    pub fn staged_ids(&self) -> Vec<i64> {
        self.staged.iter().map(|artist| artist.id).collect()
    }

    /// Whether a search can be issued right now.
    pub fn can_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Whether a search request is in flight.
    pub fn is_searching(&self) -> bool {
        matches!(self.search, SearchPhase::Searching)
    }

    /// Whether the user has explicitly cleared the selection (saved empty).
    pub fn cleared(&self) -> bool {
        self.form_value == "0"
    }

    /// Artists to show beside the form: the saved snapshot once a save has
    /// happened, the registration-time set before that.
    pub fn committed_display(&self) -> &[Artist] {
        if self.form_value.is_empty() {
            &self.original
        } else {
            &self.saved
        }
    }

    /// Apply an event and return the new state.
    /// This is the core state machine transition function.
    pub fn transition(self, event: PickerEvent) -> ArtistSelection {
        match event {
            PickerEvent::Open => {
                let mut state = self;
                state.is_open = true;
                state.open_turns += 1;
                state
            }
            PickerEvent::SetQuery(value) => {
                let mut state = self;
                state.query = value;
                state
            }
            PickerEvent::SearchStarted => {
                let mut state = self;
                if !state.can_search() {
                    return state;
                }
                state.search_turn += 1;
                state.search = SearchPhase::Searching;
                state
            }
            PickerEvent::SearchComplete { turn, hits, error } => {
                let mut state = self;
                if !state.is_open || !state.is_searching() || turn != state.search_turn {
                    debug!("Dropping stale search completion (turn {})", turn);
                    return state;
                }
                state.search = match error {
                    Some(message) => SearchPhase::Failed(message),
                    None => {
                        let staged_ids: HashSet<i64> = state.staged_ids().into_iter().collect();
                        let offerable: Vec<Artist> = hits
                            .into_iter()
                            .filter(|hit| !staged_ids.contains(&hit.id))
                            .collect();
                        if offerable.is_empty() {
                            SearchPhase::NoMatches(state.query.trim().to_string())
                        } else {
                            SearchPhase::Results(offerable)
                        }
                    }
                };
                state
            }
            PickerEvent::StageHit(id) => {
                let mut state = self;
                if let SearchPhase::Results(hits) = &mut state.search {
                    if let Some(position) = hits.iter().position(|hit| hit.id == id) {
                        let hit = hits.remove(position);
                        // Duplicate ids are never staged twice
                        if !state.staged.iter().any(|artist| artist.id == id) {
                            state.staged.push(hit);
                            state.edited = true;
                            state.confirmed = false;
                        }
                    }
                }
                state
            }
            PickerEvent::RemoveStaged(id) => {
                let mut state = self;
                if let Some(position) = state.staged.iter().position(|artist| artist.id == id) {
                    state.staged.remove(position);
                    state.edited = true;
                    state.confirmed = false;
                }
                state
            }
            PickerEvent::Save => {
                let mut state = self;
                state.saved = state.staged.clone();
                state.edited = false;
                state.confirmed = true;
                state.form_value = if state.saved.is_empty() {
                    // Sentinel for "explicitly cleared", distinct from untouched ""
                    "0".to_string()
                } else {
                    state
                        .saved
                        .iter()
                        .map(|artist| artist.id.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                };
                state.close()
            }
            PickerEvent::Reset => {
                let mut state = self;
                state.staged = state.original.clone();
                state.saved = Vec::new();
                state.edited = false;
                state.confirmed = false;
                state.form_value = String::new();
                state.not_saved = false;
                state
            }
            PickerEvent::Close => self.close(),
        }
    }

    /// Shared close evaluation: clear the results area, compute the
    /// unsaved-changes warning, and mark the modal hidden.
    fn close(mut self) -> ArtistSelection {
        self.is_open = false;
        self.search = SearchPhase::Idle;
        self.not_saved = self.edited && !(self.has_saved() && self.staged_matches_saved());
        self
    }

    /// Whether a save has happened since registration or the last reset.
    fn has_saved(&self) -> bool {
        !self.form_value.is_empty()
    }

    /// Positional id comparison: reordering counts as a difference.
    fn staged_matches_saved(&self) -> bool {
        self.staged.len() == self.saved.len()
            && self
                .staged
                .iter()
                .zip(self.saved.iter())
                .all(|(staged, saved)| staged.id == saved.id)
    }
}

// ============================================================================
// Page-wide Picker Registry
// ============================================================================

/// All picker instances on the page, keyed by namespace prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistPickerState {
    pub pickers: HashMap<String, ArtistSelection>,
}

impl ArtistPickerState {
    /// Initialize a picker for `prefix` with the form's current artists.
    ///
    /// The current set becomes both `original` and the initial `staged`
    /// (duplicate ids dropped). Re-registering an existing prefix is a
    /// no-op so repeated page wiring cannot clobber live state.
    pub fn register(&mut self, prefix: &str, current: Vec<Artist>) {
        if self.pickers.contains_key(prefix) {
            return;
        }
        let mut seen = HashSet::new();
        let unique: Vec<Artist> = current
            .into_iter()
            .filter(|artist| seen.insert(artist.id))
            .collect();
        self.pickers
            .insert(prefix.to_string(), ArtistSelection::new(unique));
    }

    /// Get a picker instance by prefix.
    pub fn picker(&self, prefix: &str) -> Option<&ArtistSelection> {
        self.pickers.get(prefix)
    }

    /// Dispatch an event to the picker registered under `prefix`.
    pub fn dispatch(&mut self, prefix: &str, event: PickerEvent) {
        if let Some(current_state) = self.pickers.remove(prefix) {
            let new_state = current_state.transition(event);
            self.pickers.insert(prefix.to_string(), new_state);
        }
    }
}
