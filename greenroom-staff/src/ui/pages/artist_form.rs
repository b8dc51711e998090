//! Artist form page: member picker, nickname editor, photo check.

use dioxus::prelude::*;
use greenroom_ui::{
    Artist, ArtistPickerModal, ArtistSelectionSummary, CoverFieldView, NicknameEditorModal,
    NicknameSummary,
};

use crate::ui::staff_service::use_staff;

/// Namespace for the group-members picker instance.
const MEMBERS_PREFIX: &str = "artist_members";

/// Fixture artwork standing in for a file chooser: (label, width, height).
const PHOTO_CHOICES: [(&str, u32, u32); 3] = [
    ("Banner 1500x500", 1500, 500),
    ("Banner 900x300", 900, 300),
    ("Square 1000x1000", 1000, 1000),
];

/// Members currently on the artist, as the form would render them.
fn current_members() -> Vec<Artist> {
    vec![Artist {
        id: 7,
        name: "Vera Lane".to_string(),
    }]
}

#[component]
pub fn ArtistForm() -> Element {
    let staff = use_staff();

    // Seed from the form's field values on mount, like a fresh page load.
    use_hook({
        let staff = staff.clone();
        move || {
            staff.register_picker(MEMBERS_PREFIX, current_members());
            staff.seed_nicknames("hollows");
        }
    });

    let picker = staff
        .pickers
        .read()
        .picker(MEMBERS_PREFIX)
        .cloned()
        .unwrap_or_default();
    let nicknames = staff.nicknames.read().clone();
    let photo = staff.artist_photo.read().clone();

    let on_open = {
        let staff = staff.clone();
        move |_| staff.open_picker(MEMBERS_PREFIX)
    };
    let on_query_change = {
        let staff = staff.clone();
        move |value: String| staff.set_picker_query(MEMBERS_PREFIX, value)
    };
    let on_search = {
        let staff = staff.clone();
        move |_| staff.run_search(MEMBERS_PREFIX)
    };
    let on_stage = {
        let staff = staff.clone();
        move |id: i64| staff.stage_hit(MEMBERS_PREFIX, id)
    };
    let on_remove = {
        let staff = staff.clone();
        move |id: i64| staff.remove_staged(MEMBERS_PREFIX, id)
    };
    let on_save = {
        let staff = staff.clone();
        move |_| staff.save_picker(MEMBERS_PREFIX)
    };
    let on_reset = {
        let staff = staff.clone();
        move |_| staff.reset_picker(MEMBERS_PREFIX)
    };
    let on_close = {
        let staff = staff.clone();
        move |_| staff.close_picker(MEMBERS_PREFIX)
    };

    let on_open_nicknames = {
        let staff = staff.clone();
        move |_| staff.open_nicknames()
    };
    let on_nickname_input = {
        let staff = staff.clone();
        move |value: String| staff.set_nickname_input(value)
    };
    let on_nickname_submit = {
        let staff = staff.clone();
        move |_| staff.submit_nickname()
    };
    let on_nickname_remove = {
        let staff = staff.clone();
        move |index: usize| staff.remove_nickname(index)
    };
    let on_nicknames_close = {
        let staff = staff.clone();
        move |_| staff.close_nicknames()
    };

    rsx! {
        div { class: "max-w-2xl space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-white", "Edit artist" }
                p { class: "text-gray-400 text-sm mt-1", "The Hollow Suns" }
            }

            ArtistSelectionSummary {
                state: picker.clone(),
                label: "Members",
                field_name: "artist_members",
                on_open,
            }

            NicknameSummary {
                state: nicknames.clone(),
                field_name: "artist_nicknames",
                on_open: on_open_nicknames,
            }

            div { class: "space-y-2",
                CoverFieldView { state: photo, label: "Artist photo" }
                div { class: "flex flex-wrap gap-2",
                    for (label_text , width , height) in PHOTO_CHOICES {
                        button {
                            class: "px-3 py-1.5 rounded bg-gray-700 hover:bg-gray-600 text-gray-200 text-sm",
                            onclick: {
                                let staff = staff.clone();
                                move |_| staff.artist_photo_loaded(width, height, None)
                            },
                            "{label_text}"
                        }
                    }
                    button {
                        class: "px-3 py-1.5 rounded text-gray-400 hover:text-white text-sm",
                        onclick: {
                            let staff = staff.clone();
                            move |_| staff.artist_photo_cleared()
                        },
                        "Clear"
                    }
                }
            }

            ArtistPickerModal {
                state: picker,
                title: "Select members",
                on_query_change,
                on_search,
                on_stage,
                on_remove,
                on_save,
                on_reset,
                on_close,
            }

            NicknameEditorModal {
                state: nicknames,
                on_input_change: on_nickname_input,
                on_submit: on_nickname_submit,
                on_remove: on_nickname_remove,
                on_close: on_nicknames_close,
            }
        }
    }
}
