//! Genre selection mirror view

use dioxus::prelude::*;

/// Read-only mirror of the form's genre multi-select
#[component]
pub fn GenreMirrorView(selected: Vec<String>) -> Element {
    if selected.is_empty() {
        return rsx! {
            p { class: "text-gray-500 text-sm", "No genres selected" }
        };
    }

    rsx! {
        ul { class: "flex flex-wrap gap-1.5",
            for (index , name) in selected.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "px-2.5 py-1 text-xs bg-gray-700 text-gray-300 rounded-full",
                    "{name}"
                }
            }
        }
    }
}
