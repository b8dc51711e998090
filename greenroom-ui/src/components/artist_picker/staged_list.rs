//! Staged artist list view

use crate::components::icons::XIcon;
use crate::display_types::Artist;
use dioxus::prelude::*;

/// Staged artists with a remove affordance per entry
#[component]
pub fn StagedArtistListView(staged: Vec<Artist>, on_remove: EventHandler<i64>) -> Element {
    if staged.is_empty() {
        return rsx! {
            p { class: "text-gray-500 text-sm py-2", "No artists selected" }
        };
    }

    rsx! {
        ul { class: "space-y-1",
            for artist in staged.iter() {
                li {
                    key: "{artist.id}",
                    class: "flex items-center justify-between gap-2 px-3 py-1.5 bg-gray-900/50 rounded",
                    "data-artist-id": "{artist.id}",
                    span { class: "text-sm text-gray-100 truncate", "{artist.name}" }
                    button {
                        class: "p-1 text-gray-400 hover:text-gray-200 flex-shrink-0 rounded hover:bg-gray-700/50 transition-colors",
                        aria_label: "Remove {artist.name}",
                        onclick: {
                            let id = artist.id;
                            move |_| on_remove.call(id)
                        },
                        XIcon { class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}
