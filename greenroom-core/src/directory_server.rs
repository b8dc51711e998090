use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::directory::ArtistDirectory;

#[derive(Clone)]
struct DirectoryServerState {
    directory: ArtistDirectory,
}

/// Connection details for the running directory server.
#[derive(Clone)]
pub struct DirectoryServerHandle {
    pub host: String,
    pub port: u16,
}

impl DirectoryServerHandle {
    /// URL of the artist search endpoint.
    pub fn search_url(&self) -> String {
        format!("http://{}:{}/staff/search/artists", self.host, self.port)
    }
}

/// Start the directory server on a random port.
/// Returns a handle with host and port.
pub async fn start_directory_server(
    directory: ArtistDirectory,
    host: &str,
) -> DirectoryServerHandle {
    let state = DirectoryServerState { directory };

    let app = Router::new()
        .route("/staff/search/artists", get(handle_search))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_addr = format!("{}:0", host);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind directory server");
    let port = listener.local_addr().unwrap().port();

    tracing::info!("Directory server listening on http://{}:{}", host, port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    DirectoryServerHandle {
        host: host.to_string(),
        port,
    }
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    name: String,
}

/// Body for `GET /staff/search/artists?name=<term>`: name-id pairs, or a
/// null response for a blank term.
fn search_response(directory: &ArtistDirectory, name: &str) -> Value {
    if name.trim().is_empty() {
        return json!({ "response": null });
    }
    let pairs: Vec<(String, i64)> = directory
        .search(name)
        .into_iter()
        .map(|artist| (artist.name, artist.id))
        .collect();
    debug!("Search '{}' matched {} artist(s)", name, pairs.len());
    json!({ "response": pairs })
}

async fn handle_search(
    State(state): State<DirectoryServerState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(search_response(&state.directory, &params.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryArtist;

    fn test_handle() -> DirectoryServerHandle {
        DirectoryServerHandle {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }

    fn test_directory() -> ArtistDirectory {
        ArtistDirectory::new(vec![
            DirectoryArtist {
                id: 1,
                name: "Night Parade".to_string(),
                nicknames: Vec::new(),
                group_members: Vec::new(),
            },
            DirectoryArtist {
                id: 2,
                name: "Nightfall Choir".to_string(),
                nicknames: Vec::new(),
                group_members: Vec::new(),
            },
        ])
    }

    #[test]
    fn search_url_points_at_staff_endpoint() {
        let h = test_handle();
        assert_eq!(
            h.search_url(),
            "http://127.0.0.1:8080/staff/search/artists"
        );
    }

    #[test]
    fn blank_term_yields_null_response() {
        let body = search_response(&test_directory(), "  ");
        assert_eq!(body, json!({ "response": null }));
    }

    #[test]
    fn matches_yield_name_id_pairs() {
        let body = search_response(&test_directory(), "night parade");
        assert_eq!(body, json!({ "response": [["Night Parade", 1]] }));
    }

    #[test]
    fn no_matches_yield_empty_list() {
        let body = search_response(&test_directory(), "copper");
        assert_eq!(body, json!({ "response": [] }));
    }
}
