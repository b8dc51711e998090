//! Nickname editor views

use crate::components::icons::{PencilIcon, XIcon};
use crate::components::modal::Modal;
use crate::components::text_input::{TextInput, TextInputSize};
use crate::stores::nickname_editor::NicknameEditor;
use dioxus::prelude::*;

/// Modal editor for the artist nickname list
///
/// Enter in the text box adds entries (comma-separated multi-add allowed);
/// closing commits the working list back to the form field.
#[component]
pub fn NicknameEditorModal(
    state: ReadSignal<NicknameEditor>,
    on_input_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_remove: EventHandler<usize>,
    on_close: EventHandler<()>,
) -> Element {
    let st = state.read();
    let is_open = st.is_open;
    let input = st.input.clone();
    let nicknames = st.nicknames.clone();
    drop(st);

    rsx! {
        Modal {
            is_open,
            title: "Edit nicknames",
            on_close,
            div { class: "space-y-4",
                if nicknames.is_empty() {
                    p { class: "text-gray-500 text-sm py-2", "No nicknames yet" }
                } else {
                    ul { class: "space-y-1",
                        for (index , nickname) in nicknames.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "flex items-center justify-between gap-2 px-3 py-1.5 bg-gray-900/50 rounded",
                                span { class: "text-sm text-gray-100 truncate", "{nickname}" }
                                button {
                                    class: "p-1 text-gray-400 hover:text-gray-200 flex-shrink-0 rounded hover:bg-gray-700/50 transition-colors",
                                    aria_label: "Remove {nickname}",
                                    onclick: move |_| on_remove.call(index),
                                    XIcon { class: "w-4 h-4" }
                                }
                            }
                        }
                    }
                }

                div { class: "flex gap-2",
                    div { class: "flex-1",
                        TextInput {
                            value: input,
                            size: TextInputSize::Medium,
                            placeholder: "Add a nickname...",
                            on_input: move |value| on_input_change.call(value),
                            on_keydown: move |e: KeyboardEvent| {
                                if e.key() == Key::Enter {
                                    on_submit.call(());
                                }
                            },
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                        onclick: move |_| on_submit.call(()),
                        "Add"
                    }
                }
            }
        }
    }
}

/// Committed nicknames beside the form, with the hidden field
#[component]
pub fn NicknameSummary(
    state: ReadSignal<NicknameEditor>,
    /// Name of the hidden input the owning form submits
    field_name: String,
    on_open: EventHandler<()>,
) -> Element {
    let st = state.read();
    let committed = st.committed();
    let form_value = st.form_value.clone();
    drop(st);

    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center justify-between",
                span { class: "text-sm font-medium text-gray-400", "Nicknames" }
                button {
                    class: "p-1 text-gray-400 hover:text-gray-200 rounded hover:bg-gray-700/50 transition-colors",
                    aria_label: "Edit nicknames",
                    onclick: move |_| on_open.call(()),
                    PencilIcon { class: "w-4 h-4" }
                }
            }

            if committed.is_empty() {
                p { class: "text-gray-500 text-sm", "No nicknames" }
            } else {
                ul { class: "flex flex-wrap gap-1.5",
                    for (index , nickname) in committed.iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "px-2.5 py-1 text-xs bg-gray-700 text-gray-300 rounded-full",
                            "{nickname}"
                        }
                    }
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
