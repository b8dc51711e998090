//! greenroom-ui - Shared UI types and components for greenroom
//!
//! Contains display types, stores, and pure view components used by the
//! staff console. No I/O happens here; stores are plain state machines and
//! components are projections of them.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
