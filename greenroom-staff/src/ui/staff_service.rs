//! StaffService owns the form store signals and is responsible for:
//! - Dispatching events into the stores
//! - Running artist searches and feeding completions back through dispatch
//!
//! Components read the signals and call the action methods; they never
//! mutate store state directly.

use dioxus::prelude::*;
use greenroom_core::artist_search::search_artists;
use greenroom_ui::stores::{
    ArtistPickerState, AspectRatio, CoverField, GenreSelection, NicknameEditor, NicknameEvent,
    PickerEvent,
};
use greenroom_ui::{AlbumKind, Artist};
use tracing::{debug, warn};

use super::app_context::StaffContext;
use super::display::artists_from_hits;

/// Inline message shown in the results panel when the search request fails.
const SEARCH_FAILED_MESSAGE: &str = "Error searching";

/// Album covers are square; artist photos are wide banners.
pub const ALBUM_COVER_RATIO: AspectRatio = AspectRatio {
    width: 1,
    height: 1,
};
pub const ARTIST_PHOTO_RATIO: AspectRatio = AspectRatio {
    width: 3,
    height: 1,
};

/// Owns the reactive state behind the staff form pages.
///
/// Created inside the Dioxus component tree because Signals are scoped to it.
#[derive(Clone)]
pub struct StaffService {
    /// One artist picker per form field, keyed by prefix
    pub pickers: Signal<ArtistPickerState>,
    pub nicknames: Signal<NicknameEditor>,
    pub album_cover: Signal<CoverField>,
    pub artist_photo: Signal<CoverField>,
    pub genres: Signal<GenreSelection>,
    pub album_kind: Signal<AlbumKind>,
    search_url: String,
}

impl StaffService {
    pub fn new(context: &StaffContext) -> Self {
        Self {
            pickers: Signal::new(ArtistPickerState::default()),
            nicknames: Signal::new(NicknameEditor::default()),
            album_cover: Signal::new(CoverField::new(ALBUM_COVER_RATIO)),
            artist_photo: Signal::new(CoverField::new(ARTIST_PHOTO_RATIO)),
            genres: Signal::new(GenreSelection::default()),
            album_kind: Signal::new(AlbumKind::default()),
            search_url: context.search_url.clone(),
        }
    }

    /// Register a picker instance for a form field.
    /// Does nothing if the prefix is already registered, so pages can call
    /// this unconditionally when they mount.
    pub fn register_picker(&self, prefix: &str, current: Vec<Artist>) {
        let mut pickers = self.pickers;
        if pickers.peek().picker(prefix).is_some() {
            return;
        }
        pickers.write().register(prefix, current);
    }

    pub fn open_picker(&self, prefix: &str) {
        self.dispatch_picker(prefix, PickerEvent::Open);
    }

    pub fn set_picker_query(&self, prefix: &str, query: String) {
        self.dispatch_picker(prefix, PickerEvent::SetQuery(query));
    }

    /// Kick off an artist search for the given picker.
    ///
    /// The completion is dispatched back through the store, which drops it
    /// if the modal has closed or another search has started since.
    pub fn run_search(&self, prefix: &str) {
        let mut pickers = self.pickers;
        let prefix = prefix.to_string();
        let search_url = self.search_url.clone();

        spawn(async move {
            let query = {
                let state = pickers.read();
                let Some(picker) = state.picker(&prefix) else {
                    return;
                };
                if !picker.can_search() {
                    return;
                }
                picker.query.trim().to_string()
            };

            pickers
                .write()
                .dispatch(&prefix, PickerEvent::SearchStarted);
            let turn = pickers
                .read()
                .picker(&prefix)
                .map(|picker| picker.search_turn)
                .unwrap_or_default();

            debug!(turn, "Searching artists for {prefix}: {query}");
            let event = match search_artists(&search_url, &query).await {
                Ok(hits) => PickerEvent::SearchComplete {
                    turn,
                    hits: artists_from_hits(hits),
                    error: None,
                },
                Err(e) => {
                    warn!("Artist search failed: {e}");
                    PickerEvent::SearchComplete {
                        turn,
                        hits: vec![],
                        error: Some(SEARCH_FAILED_MESSAGE.to_string()),
                    }
                }
            };
            pickers.write().dispatch(&prefix, event);
        });
    }

    pub fn stage_hit(&self, prefix: &str, id: i64) {
        self.dispatch_picker(prefix, PickerEvent::StageHit(id));
    }

    pub fn remove_staged(&self, prefix: &str, id: i64) {
        self.dispatch_picker(prefix, PickerEvent::RemoveStaged(id));
    }

    pub fn save_picker(&self, prefix: &str) {
        self.dispatch_picker(prefix, PickerEvent::Save);
    }

    pub fn reset_picker(&self, prefix: &str) {
        self.dispatch_picker(prefix, PickerEvent::Reset);
    }

    pub fn close_picker(&self, prefix: &str) {
        self.dispatch_picker(prefix, PickerEvent::Close);
    }

    fn dispatch_picker(&self, prefix: &str, event: PickerEvent) {
        let mut pickers = self.pickers;
        pickers.write().dispatch(prefix, event);
    }

    /// Seed the nickname editor from the form's current field value.
    pub fn seed_nicknames(&self, field_value: &str) {
        let mut nicknames = self.nicknames;
        nicknames.set(NicknameEditor::seeded(field_value));
    }

    pub fn open_nicknames(&self) {
        self.dispatch_nickname(NicknameEvent::Open);
    }

    pub fn set_nickname_input(&self, value: String) {
        self.dispatch_nickname(NicknameEvent::SetInput(value));
    }

    pub fn submit_nickname(&self) {
        self.dispatch_nickname(NicknameEvent::SubmitInput);
    }

    pub fn remove_nickname(&self, index: usize) {
        self.dispatch_nickname(NicknameEvent::Remove(index));
    }

    pub fn close_nicknames(&self) {
        self.dispatch_nickname(NicknameEvent::Close);
    }

    fn dispatch_nickname(&self, event: NicknameEvent) {
        let mut nicknames = self.nicknames;
        let next = nicknames.peek().clone().transition(event);
        nicknames.set(next);
    }

    /// Record the dimensions of a chosen album cover image.
    pub fn album_cover_loaded(&self, width: u32, height: u32, preview_url: Option<String>) {
        let mut album_cover = self.album_cover;
        album_cover.write().image_loaded(width, height, preview_url);
    }

    pub fn album_cover_cleared(&self) {
        let mut album_cover = self.album_cover;
        album_cover.write().cleared();
    }

    pub fn artist_photo_loaded(&self, width: u32, height: u32, preview_url: Option<String>) {
        let mut artist_photo = self.artist_photo;
        artist_photo.write().image_loaded(width, height, preview_url);
    }

    pub fn artist_photo_cleared(&self) {
        let mut artist_photo = self.artist_photo;
        artist_photo.write().cleared();
    }

    /// Replace the mirrored genre selection.
    pub fn set_genres(&self, selected: Vec<String>) {
        let mut genres = self.genres;
        genres.write().set_selected(selected);
    }

    pub fn clear_genres(&self) {
        let mut genres = self.genres;
        genres.write().clear();
    }

    pub fn set_album_kind(&self, kind: AlbumKind) {
        let mut album_kind = self.album_kind;
        album_kind.set(kind);
    }
}

/// Hook to access the staff service from components
pub fn use_staff() -> StaffService {
    use_context::<StaffService>()
}
