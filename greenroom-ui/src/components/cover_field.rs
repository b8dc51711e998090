//! Cover art field view

use crate::components::icons::AlertTriangleIcon;
use crate::stores::artwork::{ArtworkStatus, CoverField};
use dioxus::prelude::*;

/// Cover image preview with the aspect-ratio verdict
///
/// Renders the preview once an image has been measured and an inline error
/// when the dimensions fail the exact ratio check.
#[component]
pub fn CoverFieldView(state: ReadSignal<CoverField>, label: String) -> Element {
    let st = state.read();
    let expected = st.expected;
    let status = st.status;
    let preview_url = st.preview_url.clone();
    drop(st);

    rsx! {
        div { class: "space-y-2",
            span { class: "text-sm font-medium text-gray-400", "{label}" }

            if let Some(url) = preview_url {
                img {
                    class: "max-w-48 rounded-lg",
                    src: "{url}",
                    alt: "{label} preview",
                }
            }

            match status {
                ArtworkStatus::Unchecked => rsx! {
                    p { class: "text-gray-500 text-sm", "No image chosen" }
                },
                ArtworkStatus::Valid => rsx! {
                    p { class: "text-green-300 text-sm", "Looks good ({expected.display()})" }
                },
                ArtworkStatus::Invalid { width, height } => rsx! {
                    div { class: "flex items-center gap-2 text-red-300 text-sm",
                        AlertTriangleIcon { class: "w-4 h-4" }
                        span {
                            "Image is {width}x{height}; expected a {expected.display()} ratio"
                        }
                    }
                },
            }
        }
    }
}
