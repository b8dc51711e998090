//! Artist search panel view

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::{PlusIcon, SearchIcon};
use crate::components::text_input::{TextInput, TextInputSize};
use crate::stores::artist_picker::{ArtistSelection, SearchPhase};
use dioxus::prelude::*;

/// Search box plus results area for the picker modal
///
/// Accepts `ReadSignal<ArtistSelection>` and reads at leaf level for
/// granular reactivity. Hits already staged never appear here; the store
/// filters them out when results arrive.
#[component]
pub fn ArtistSearchPanelView(
    state: ReadSignal<ArtistSelection>,
    on_query_change: EventHandler<String>,
    on_search: EventHandler<()>,
    on_stage: EventHandler<i64>,
) -> Element {
    // Read state at this leaf component
    let st = state.read();
    let query = st.query.clone();
    let can_search = st.can_search();
    let searching = st.is_searching();
    let phase = st.search.clone();
    drop(st);

    rsx! {
        div { class: "space-y-3",
            div { class: "flex gap-2",
                div { class: "flex-1",
                    TextInput {
                        value: query,
                        size: TextInputSize::Medium,
                        placeholder: "Search artists...",
                        on_input: move |value| on_query_change.call(value),
                        on_keydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                on_search.call(());
                            }
                        },
                    }
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 bg-gray-700 text-sm text-white rounded-lg hover:bg-gray-600 disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-150",
                    disabled: searching || !can_search,
                    onclick: move |_| on_search.call(()),
                    SearchIcon { class: "w-4 h-4" }
                    if searching {
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }

            match phase {
                SearchPhase::Idle => rsx! {
                    p { class: "text-gray-500 text-sm text-center py-4",
                        "Search for artists to add them"
                    }
                },
                SearchPhase::Searching => rsx! {
                    LoadingSpinner { message: "Searching...".to_string() }
                },
                SearchPhase::Failed(message) => rsx! {
                    ErrorDisplay { message }
                },
                SearchPhase::NoMatches(term) => rsx! {
                    div { class: "text-center py-4",
                        p { class: "text-gray-400 text-sm", "No results for \"{term}\"" }
                    }
                },
                SearchPhase::Results(hits) => rsx! {
                    ul { class: "space-y-1",
                        for hit in hits.iter() {
                            li {
                                key: "{hit.id}",
                                class: "flex items-center justify-between gap-2 px-3 py-1.5 bg-gray-900/50 rounded",
                                "data-artist-id": "{hit.id}",
                                span { class: "text-sm text-gray-100 truncate", "{hit.name}" }
                                button {
                                    class: "p-1 text-gray-400 hover:text-green-300 flex-shrink-0 rounded hover:bg-gray-700/50 transition-colors",
                                    aria_label: "Add {hit.name}",
                                    onclick: {
                                        let id = hit.id;
                                        move |_| on_stage.call(id)
                                    },
                                    PlusIcon { class: "w-4 h-4" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
