//! Album kind selector view

use crate::display_types::AlbumKind;
use dioxus::prelude::*;

/// Select for LP/EP/Single, mirrored into the flag pair the form persists
#[component]
pub fn AlbumKindSelect(kind: AlbumKind, on_change: EventHandler<AlbumKind>) -> Element {
    let (is_ep, is_single) = kind.flags();

    rsx! {
        div { class: "flex items-center gap-3",
            label { class: "text-sm text-gray-400", "Kind:" }
            select {
                class: "bg-gray-700 text-white rounded px-3 py-1.5 text-sm border border-gray-600 focus:border-blue-500 focus:outline-none",
                onchange: move |evt: Event<FormData>| {
                    if let Some(kind) = AlbumKind::from_code(&evt.value()) {
                        on_change.call(kind);
                    }
                },
                for option_kind in [AlbumKind::Lp, AlbumKind::Ep, AlbumKind::Single] {
                    option {
                        key: "{option_kind.code()}",
                        value: "{option_kind.code()}",
                        selected: kind == option_kind,
                        "{option_kind.display_name()}"
                    }
                }
            }

            input { r#type: "hidden", name: "is_ep", value: if is_ep { "1" } else { "0" } }
            input {
                r#type: "hidden",
                name: "is_single",
                value: if is_single { "1" } else { "0" },
            }
        }
    }
}
