//! Store types for UI state management
//!
//! These stores hold the in-memory state behind the staff form widgets.
//! State is the single source of truth: views project it and every change
//! goes through a store method or dispatched event.

pub mod artist_picker;
pub mod artwork;
pub mod genre_list;
pub mod nickname_editor;

pub use artist_picker::*;
pub use artwork::*;
pub use genre_list::*;
pub use nickname_editor::*;
