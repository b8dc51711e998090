//! Shared UI components

pub mod album_kind_select;
pub mod artist_picker;
pub mod cover_field;
pub mod genre_list;
pub mod helpers;
pub mod icons;
pub mod modal;
pub mod nickname_editor;
pub mod text_input;

pub use album_kind_select::AlbumKindSelect;
pub use artist_picker::{
    ArtistPickerModal, ArtistSearchPanelView, ArtistSelectionSummary, StagedArtistListView,
};
pub use cover_field::CoverFieldView;
pub use genre_list::GenreMirrorView;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, CheckIcon, PencilIcon, PlusIcon, SearchIcon, XIcon,
};
pub use modal::Modal;
pub use nickname_editor::{NicknameEditorModal, NicknameSummary};
pub use text_input::{TextInput, TextInputSize};
