//! Album form page: artist picker, kind select, genre mirror, cover check.

use chrono::NaiveDate;
use dioxus::prelude::*;
use greenroom_ui::{
    format_release_date, AlbumKind, AlbumKindSelect, Artist, ArtistPickerModal,
    ArtistSelectionSummary, CoverFieldView, GenreMirrorView,
};

use crate::ui::staff_service::use_staff;

/// Namespace for the album's artist picker instance.
const ARTISTS_PREFIX: &str = "album_artists";

const GENRE_OPTIONS: [&str; 6] = [
    "Ambient",
    "Electronic",
    "Folk",
    "Indie Rock",
    "Jazz",
    "Shoegaze",
];

/// Fixture artwork standing in for a file chooser: (label, width, height).
const COVER_CHOICES: [(&str, u32, u32); 3] = [
    ("Press shot 1400x1400", 1400, 1400),
    ("Scan 1200x1200", 1200, 1200),
    ("Banner crop 1920x1080", 1920, 1080),
];

/// Artists currently on the album, as the form would render them.
fn current_artists() -> Vec<Artist> {
    vec![
        Artist {
            id: 1,
            name: "Night Parade".to_string(),
        },
        Artist {
            id: 4,
            name: "Copper Veil".to_string(),
        },
    ]
}

#[component]
pub fn AlbumForm() -> Element {
    let staff = use_staff();

    use_hook({
        let staff = staff.clone();
        move || staff.register_picker(ARTISTS_PREFIX, current_artists())
    });

    let picker = staff
        .pickers
        .read()
        .picker(ARTISTS_PREFIX)
        .cloned()
        .unwrap_or_default();
    let cover = staff.album_cover.read().clone();
    let genres = staff.genres.read().selected.clone();
    let kind = *staff.album_kind.read();
    let release_date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap_or_default();

    let on_open = {
        let staff = staff.clone();
        move |_| staff.open_picker(ARTISTS_PREFIX)
    };
    let on_query_change = {
        let staff = staff.clone();
        move |value: String| staff.set_picker_query(ARTISTS_PREFIX, value)
    };
    let on_search = {
        let staff = staff.clone();
        move |_| staff.run_search(ARTISTS_PREFIX)
    };
    let on_stage = {
        let staff = staff.clone();
        move |id: i64| staff.stage_hit(ARTISTS_PREFIX, id)
    };
    let on_remove = {
        let staff = staff.clone();
        move |id: i64| staff.remove_staged(ARTISTS_PREFIX, id)
    };
    let on_save = {
        let staff = staff.clone();
        move |_| staff.save_picker(ARTISTS_PREFIX)
    };
    let on_reset = {
        let staff = staff.clone();
        move |_| staff.reset_picker(ARTISTS_PREFIX)
    };
    let on_close = {
        let staff = staff.clone();
        move |_| staff.close_picker(ARTISTS_PREFIX)
    };

    let toggle_genre = {
        let staff = staff.clone();
        move |genre: &'static str, on: bool| {
            let mut selected = staff.genres.peek().selected.clone();
            if on {
                if !selected.iter().any(|name| name == genre) {
                    selected.push(genre.to_string());
                }
            } else {
                selected.retain(|name| name != genre);
            }
            staff.set_genres(selected);
        }
    };

    let reset_form = {
        let staff = staff.clone();
        move |_| {
            staff.clear_genres();
            staff.album_cover_cleared();
            staff.set_album_kind(AlbumKind::default());
        }
    };

    rsx! {
        div { class: "max-w-2xl space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-white", "Edit album" }
                p { class: "text-gray-400 text-sm mt-1",
                    "Signal Fires · released {format_release_date(release_date)}"
                }
            }

            ArtistSelectionSummary {
                state: picker.clone(),
                label: "Artists",
                field_name: "album_artists",
                on_open,
            }

            div { class: "space-y-2",
                span { class: "text-sm font-medium text-gray-400", "Kind" }
                AlbumKindSelect {
                    kind,
                    on_change: {
                        let staff = staff.clone();
                        move |kind| staff.set_album_kind(kind)
                    },
                }
            }

            div { class: "grid grid-cols-2 gap-6",
                div { class: "space-y-2",
                    span { class: "text-sm font-medium text-gray-400", "Genres" }
                    div { class: "space-y-1",
                        for genre in GENRE_OPTIONS {
                            label { class: "flex items-center gap-2 cursor-pointer",
                                input {
                                    r#type: "checkbox",
                                    class: "rounded text-indigo-600 focus:ring-indigo-500 bg-gray-700 border-gray-600",
                                    checked: genres.iter().any(|name| name == genre),
                                    onchange: {
                                        let toggle_genre = toggle_genre.clone();
                                        move |e: Event<FormData>| toggle_genre(genre, e.checked())
                                    },
                                }
                                span { class: "text-gray-200 text-sm", "{genre}" }
                            }
                        }
                    }
                }
                div { class: "space-y-2",
                    span { class: "text-sm font-medium text-gray-400", "Selected" }
                    GenreMirrorView { selected: genres.clone() }
                }
            }

            div { class: "space-y-2",
                CoverFieldView { state: cover, label: "Cover art" }
                div { class: "flex flex-wrap gap-2",
                    for (label_text , width , height) in COVER_CHOICES {
                        button {
                            class: "px-3 py-1.5 rounded bg-gray-700 hover:bg-gray-600 text-gray-200 text-sm",
                            onclick: {
                                let staff = staff.clone();
                                move |_| staff.album_cover_loaded(width, height, None)
                            },
                            "{label_text}"
                        }
                    }
                    button {
                        class: "px-3 py-1.5 rounded text-gray-400 hover:text-white text-sm",
                        onclick: {
                            let staff = staff.clone();
                            move |_| staff.album_cover_cleared()
                        },
                        "Clear"
                    }
                }
            }

            div { class: "pt-4 border-t border-gray-700",
                button {
                    class: "px-4 py-2 rounded text-gray-400 hover:text-white text-sm",
                    onclick: reset_form,
                    "Reset form"
                }
            }

            ArtistPickerModal {
                state: picker,
                title: "Select artists",
                on_query_change,
                on_search,
                on_stage,
                on_remove,
                on_save,
                on_reset,
                on_close,
            }
        }
    }
}
