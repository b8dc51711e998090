use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use super::app_context::StaffContext;
use super::pages::{AlbumForm, ArtistForm};
use super::staff_service::StaffService;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StaffLayout)]
    #[route("/")]
    AlbumForm {},
    #[route("/artist")]
    ArtistForm {},
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("greenroom")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100, 800))
}

pub fn launch_app(context: StaffContext) {
    LaunchBuilder::desktop()
        .with_cfg(DioxusConfig::default().with_window(make_window()))
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

#[component]
fn App() -> Element {
    debug!("Rendering app component");

    // Get launch context, build the service that owns the form state
    let context = use_context::<StaffContext>();
    let staff_service = StaffService::new(&context);

    // Provide StaffService as context for all pages
    use_context_provider(|| staff_service.clone());

    rsx! {
        Router::<Route> {}
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 rounded bg-gray-700 text-white text-sm"
    } else {
        "px-3 py-1.5 rounded text-gray-400 hover:text-white text-sm"
    }
}

#[component]
fn StaffLayout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-gray-100",
            nav { class: "flex gap-2 px-6 py-3 border-b border-gray-700",
                button {
                    class: nav_class(matches!(current_route, Route::AlbumForm {})),
                    onclick: move |_| {
                        let _ = navigator().push(Route::AlbumForm {});
                    },
                    "Album"
                }
                button {
                    class: nav_class(matches!(current_route, Route::ArtistForm {})),
                    onclick: move |_| {
                        let _ = navigator().push(Route::ArtistForm {});
                    },
                    "Artist"
                }
            }
            main { class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
