//! Artist picker view components
//!
//! Pure, props-based projections of the picker store state.

mod picker_modal;
mod search_panel;
mod selection_summary;
mod staged_list;

pub use picker_modal::ArtistPickerModal;
pub use search_panel::ArtistSearchPanelView;
pub use selection_summary::ArtistSelectionSummary;
pub use staged_list::StagedArtistListView;
