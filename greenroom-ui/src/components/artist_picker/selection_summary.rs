//! Committed-selection summary beside the form

use crate::components::icons::{AlertTriangleIcon, PencilIcon};
use crate::stores::artist_picker::ArtistSelection;
use dioxus::prelude::*;

/// Read-only committed selection plus the hidden form field
///
/// Shows the registration-time artists until a save happens and the saved
/// snapshot afterwards, or the "all removed" placeholder when the selection
/// was explicitly cleared. The hidden input carries the persisted value for
/// the owning form.
#[component]
pub fn ArtistSelectionSummary(
    state: ReadSignal<ArtistSelection>,
    label: String,
    /// Name of the hidden input the owning form submits
    field_name: String,
    on_open: EventHandler<()>,
) -> Element {
    let st = state.read();
    let committed = st.committed_display().to_vec();
    let cleared = st.cleared();
    let not_saved = st.not_saved;
    let form_value = st.form_value.clone();
    drop(st);

    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center justify-between",
                span { class: "text-sm font-medium text-gray-400", "{label}" }
                button {
                    class: "p-1 text-gray-400 hover:text-gray-200 rounded hover:bg-gray-700/50 transition-colors",
                    aria_label: "Edit {label}",
                    onclick: move |_| on_open.call(()),
                    PencilIcon { class: "w-4 h-4" }
                }
            }

            if cleared {
                p { class: "text-gray-500 text-sm", "All artists removed" }
            } else if committed.is_empty() {
                p { class: "text-gray-500 text-sm", "No artists selected" }
            } else {
                ul { class: "space-y-1",
                    for artist in committed.iter() {
                        li {
                            key: "{artist.id}",
                            class: "text-sm text-gray-100 px-3 py-1.5 bg-gray-900/50 rounded",
                            "data-artist-id": "{artist.id}",
                            "{artist.name}"
                        }
                    }
                }
            }

            if not_saved {
                div { class: "flex items-center gap-2 text-amber-300 text-sm",
                    AlertTriangleIcon { class: "w-4 h-4" }
                    span { "Changes not saved" }
                }
            }

            input {
                r#type: "hidden",
                name: "{field_name}",
                value: "{form_value}",
            }
        }
    }
}
