//! Artist picker modal view

use super::search_panel::ArtistSearchPanelView;
use super::staged_list::StagedArtistListView;
use crate::components::icons::CheckIcon;
use crate::components::modal::Modal;
use crate::stores::artist_picker::ArtistSelection;
use dioxus::prelude::*;

/// The full picker dialog: staged list, search panel, save/reset footer
///
/// Renders nothing while the instance is closed, so handlers inside the
/// dialog exist only while it is visible.
#[component]
pub fn ArtistPickerModal(
    state: ReadSignal<ArtistSelection>,
    title: String,
    on_query_change: EventHandler<String>,
    on_search: EventHandler<()>,
    on_stage: EventHandler<i64>,
    on_remove: EventHandler<i64>,
    on_save: EventHandler<()>,
    on_reset: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let st = state.read();
    let is_open = st.is_open;
    let staged = st.staged.clone();
    drop(st);

    rsx! {
        Modal {
            is_open,
            title,
            on_close,
            div { class: "space-y-4",
                div {
                    h3 { class: "text-sm font-medium text-gray-400 mb-2", "Selected artists" }
                    StagedArtistListView { staged, on_remove }
                }

                ArtistSearchPanelView {
                    state,
                    on_query_change,
                    on_search,
                    on_stage,
                }

                div { class: "flex justify-between pt-4 border-t border-gray-700",
                    button {
                        class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                        onclick: move |_| on_reset.call(()),
                        "Reset"
                    }
                    button {
                        class: "flex items-center gap-2 px-4 py-2 bg-green-600 hover:bg-green-500 text-white rounded-lg",
                        onclick: move |_| on_save.call(()),
                        CheckIcon { class: "w-4 h-4" }
                        "Save"
                    }
                }
            }
        }
    }
}
