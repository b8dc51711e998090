use greenroom_core::artist_search::{search_artists, ArtistHit, ArtistSearchError};
use greenroom_core::directory::{ArtistDirectory, DirectoryArtist};
use greenroom_core::directory_server::{start_directory_server, DirectoryServerHandle};

fn make_artist(id: i64, name: &str) -> DirectoryArtist {
    DirectoryArtist {
        id,
        name: name.to_string(),
        nicknames: Vec::new(),
        group_members: Vec::new(),
    }
}

async fn start_test_server() -> DirectoryServerHandle {
    let directory = ArtistDirectory::new(vec![
        make_artist(1, "Night Parade"),
        make_artist(2, "Nightfall Choir"),
        DirectoryArtist {
            id: 3,
            name: "The Hollow Suns".to_string(),
            nicknames: vec!["hollows".to_string()],
            group_members: vec!["Vera Lane".to_string()],
        },
        make_artist(4, "Rós Haven"),
    ]);
    start_directory_server(directory, "127.0.0.1").await
}

#[tokio::test]
async fn client_and_server_agree_on_hits() {
    let server = start_test_server().await;
    let hits = search_artists(&server.search_url(), "night").await.unwrap();
    assert_eq!(
        hits,
        vec![
            ArtistHit {
                name: "Night Parade".to_string(),
                id: 1
            },
            ArtistHit {
                name: "Nightfall Choir".to_string(),
                id: 2
            },
        ]
    );
}

#[tokio::test]
async fn nickname_matches_travel_the_wire() {
    let server = start_test_server().await;
    let hits = search_artists(&server.search_url(), "hollows").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);
    assert_eq!(hits[0].name, "The Hollow Suns");
}

#[tokio::test]
async fn blank_query_yields_no_hits() {
    let server = start_test_server().await;
    let hits = search_artists(&server.search_url(), "").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn unmatched_query_yields_no_hits() {
    let server = start_test_server().await;
    let hits = search_artists(&server.search_url(), "marrow").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn non_ascii_queries_survive_encoding() {
    let server = start_test_server().await;
    let hits = search_artists(&server.search_url(), "rós").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Rós Haven");
}

#[tokio::test]
async fn unknown_path_is_a_status_error() {
    let server = start_test_server().await;
    let url = format!("http://{}:{}/missing", server.host, server.port);
    let err = search_artists(&url, "night").await.unwrap_err();
    match err {
        ArtistSearchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_an_http_error() {
    let err = search_artists("http://127.0.0.1:9/search", "night")
        .await
        .unwrap_err();
    assert!(matches!(err, ArtistSearchError::Http(_)));
}
