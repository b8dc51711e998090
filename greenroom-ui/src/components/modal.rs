//! Modal overlay component
//!
//! A fixed overlay with backdrop-click close. Content only exists in the
//! tree while open, so handlers inside the modal live exactly as long as
//! the dialog is visible.

use dioxus::prelude::*;

use crate::components::icons::XIcon;

/// Modal with title bar and close button
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    title: String,
    /// Called on backdrop click or the close button
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-gray-800 rounded-lg max-w-lg w-full mx-4",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-center justify-between px-6 py-4 border-b border-gray-700",
                    h2 { class: "text-xl font-bold text-white", "{title}" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        XIcon {}
                    }
                }
                div { class: "p-6", {children} }
            }
        }
    }
}
