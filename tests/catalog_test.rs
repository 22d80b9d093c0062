mod common;

use common::*;
use datify::{
    config::Credentials,
    error::DatifyError,
    spotify::{Catalog, auth},
};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_token_exchange_sends_basic_credentials() {
    let mut server = Server::new_async().await;
    let token = token_mock(&mut server, 1).await;

    let client = reqwest::Client::new();
    let result = auth::get_token(&client, &endpoints(&server).token_url, &credentials()).await;

    token.assert_async().await;
    let token = result.expect("token exchange should succeed");
    assert_eq!(token.access_token, TOKEN);
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_token_without_access_token_is_auth_error() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token_type": "Bearer"}).to_string())
        .create_async()
        .await;

    let result = Catalog::connect(endpoints(&server), &credentials()).await;
    assert!(matches!(result, Err(DatifyError::Auth(_))));
}

#[tokio::test]
async fn test_rejected_credentials_are_auth_error() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": "invalid_client", "error_description": "Invalid client secret"})
                .to_string(),
        )
        .create_async()
        .await;

    let result = Catalog::connect(endpoints(&server), &Credentials::new("id", "wrong")).await;
    match result {
        Err(DatifyError::Auth(msg)) => assert!(msg.contains("Invalid client secret")),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_for_artist_returns_top_match() {
    let mut server = Server::new_async().await;
    let search = get_mock(
        &mut server,
        "/search",
        artist_search_query("Queen"),
        json!({"artists": {"items": [
            artist_json("1dfeR4HaWDbWqFHLkxsg1d", "Queen", 50_000_000),
            artist_json("other", "Queen Naija", 1_000_000)
        ]}}),
        1,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    let artist = catalog.search_for_artist("Queen").await.unwrap();

    search.assert_async().await;
    let artist = artist.expect("artist should be found");
    assert_eq!(artist.id, "1dfeR4HaWDbWqFHLkxsg1d");
    assert_eq!(artist.followers.total, 50_000_000);
}

#[tokio::test]
async fn test_search_for_artist_without_match() {
    let mut server = Server::new_async().await;
    let _search = get_mock(
        &mut server,
        "/search",
        artist_search_query("nonexistentxyz"),
        json!({"artists": {"items": []}}),
        1,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    assert!(catalog.search_for_artist("nonexistentxyz").await.unwrap().is_none());
}

#[tokio::test]
async fn test_artist_name_is_percent_encoded() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Regex(r"^q=AC%2FDC&type=artist&limit=1$".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"artists": {"items": [artist_json("acdc", "AC/DC", 10)]}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    let artist = catalog.search_for_artist("AC/DC").await.unwrap();

    search.assert_async().await;
    assert_eq!(artist.map(|a| a.name), Some("AC/DC".to_string()));
}

#[tokio::test]
async fn test_genre_query_is_encoded() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Regex(r"^q=genre%3Ahip%20hop&type=artist&limit=10$".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"artists": {"items": []}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    let artists = catalog.search_top_artists_by_genre("hip hop").await.unwrap();

    search.assert_async().await;
    assert!(artists.is_empty());
}

#[tokio::test]
async fn test_top_tracks_are_joined_with_audio_features() {
    let mut server = Server::new_async().await;
    let _top = get_mock(
        &mut server,
        "/artists/q1/top-tracks",
        Matcher::UrlEncoded("market".into(), "US".into()),
        json!({"tracks": [
            track_json("t1", "Bohemian Rhapsody", 87, "Queen"),
            track_json("t2", "Don't Stop Me Now", 85, "Queen")
        ]}),
        1,
    )
    .await;
    let f1 = get_mock(
        &mut server,
        "/audio-features/t1",
        Matcher::Any,
        json!({"id": "t1", "tempo": 143.88}),
        1,
    )
    .await;
    let f2 = get_mock(
        &mut server,
        "/audio-features/t2",
        Matcher::Any,
        json!({"id": "t2", "tempo": 156.3}),
        1,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    let songs = catalog.get_songs_by_artist("q1").await.unwrap();

    f1.assert_async().await;
    f2.assert_async().await;
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].track.name, "Bohemian Rhapsody");
    assert_eq!(songs[0].features.tempo, 143.88);
    assert_eq!(songs[1].features.tempo, 156.3);
}

#[tokio::test]
async fn test_failed_audio_features_abort_the_lookup() {
    let mut server = Server::new_async().await;
    let _top = get_mock(
        &mut server,
        "/artists/q1/top-tracks",
        Matcher::Any,
        json!({"tracks": [
            track_json("t1", "One", 50, "Queen"),
            track_json("t2", "Two", 40, "Queen"),
            track_json("t3", "Three", 30, "Queen")
        ]}),
        1,
    )
    .await;
    let _f1 = get_mock(
        &mut server,
        "/audio-features/t1",
        Matcher::Any,
        json!({"tempo": 100.0}),
        1,
    )
    .await;
    let _f2 = server
        .mock("GET", "/v1/audio-features/t2")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"status": 403, "message": "Forbidden"}}).to_string())
        .create_async()
        .await;
    let f3 = get_mock(
        &mut server,
        "/audio-features/t3",
        Matcher::Any,
        json!({"tempo": 90.0}),
        0,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    let result = catalog.get_songs_by_artist("q1").await;

    f3.assert_async().await;
    match result {
        Err(DatifyError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_albums_request_uses_groups_market_and_limit() {
    let mut server = Server::new_async().await;
    let albums = get_mock(
        &mut server,
        "/artists/q1/albums",
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("include_groups".into(), "album,single".into()),
            Matcher::UrlEncoded("market".into(), "SE".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]),
        json!({"items": [album_json("a1", "A Night at the Opera", 12, "Queen")]}),
        1,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server).with_market("SE"), TOKEN);
    let items = catalog.get_albums_by_artist("q1").await.unwrap();

    albums.assert_async().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].total_tracks, 12);
}

#[tokio::test]
async fn test_missing_key_path_is_shape_error() {
    let mut server = Server::new_async().await;
    let _related = get_mock(
        &mut server,
        "/artists/q1/related-artists",
        Matcher::Any,
        json!({"unexpected": []}),
        1,
    )
    .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    match catalog.get_related_artists("q1").await {
        Err(DatifyError::Shape { endpoint, .. }) => {
            assert_eq!(endpoint, "/artists/q1/related-artists")
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_without_body_uses_reason() {
    let mut server = Server::new_async().await;
    let _search = server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let catalog = Catalog::with_token(endpoints(&server), TOKEN);
    match catalog.search_top_songs_by_genre("jazz").await {
        Err(DatifyError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_credentials_fail_without_request() {
    let mut server = Server::new_async().await;
    let token = token_mock(&mut server, 0).await;

    let client = reqwest::Client::new();
    let result = auth::get_token(
        &client,
        &endpoints(&server).token_url,
        &Credentials::new("", "secret"),
    )
    .await;

    token.assert_async().await;
    assert!(matches!(result, Err(DatifyError::Auth(_))));
}

#[tokio::test]
async fn test_token_rejection_without_json_keeps_status() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/api/token")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html><body>upstream unavailable</body></html>")
        .create_async()
        .await;

    let result = Catalog::connect(endpoints(&server), &credentials()).await;
    match result {
        Err(DatifyError::Auth(msg)) => assert_eq!(msg, "503: Service Unavailable"),
        other => panic!("expected auth error, got {other:?}"),
    }
}
