#![allow(dead_code)]

use datify::{
    cli::{ConsolePrompt, Field},
    config::{Credentials, Endpoints},
};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

pub fn credentials() -> Credentials {
    Credentials::new("id", "secret")
}

pub fn endpoints(server: &ServerGuard) -> Endpoints {
    Endpoints::new(
        format!("{}/v1", server.url()),
        format!("{}/api/token", server.url()),
    )
}

pub fn prompt(mode: &str, query: &str, view: Option<&str>) -> ConsolePrompt {
    ConsolePrompt::new()
        .preset(Field::Mode, Some(mode.to_string()))
        .preset(Field::Query, Some(query.to_string()))
        .preset(Field::View, view.map(str::to_string))
}

/// Token endpoint answering the client-credentials grant for `id:secret`.
pub async fn token_mock(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/api/token")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600}).to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

/// Authenticated GET on `path` (below `/v1`) with the given query matcher.
pub async fn get_mock(
    server: &mut ServerGuard,
    path: &str,
    query: Matcher,
    body: Value,
    hits: usize,
) -> Mock {
    server
        .mock("GET", format!("/v1{path}").as_str())
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_query(query)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub fn artist_json(id: &str, name: &str, followers: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "followers": {"href": null, "total": followers},
        "genres": ["rock"],
        "popularity": 80,
        "type": "artist"
    })
}

pub fn track_json(id: &str, name: &str, popularity: u32, artist: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "popularity": popularity,
        "duration_ms": 200000,
        "artists": [{"id": "a", "name": artist}],
        "preview_url": null
    })
}

pub fn album_json(id: &str, name: &str, total_tracks: u32, artist: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "total_tracks": total_tracks,
        "album_type": "album",
        "artists": [{"id": "a", "name": artist}]
    })
}

pub fn artist_search_query(name: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), name.into()),
        Matcher::UrlEncoded("type".into(), "artist".into()),
        Matcher::UrlEncoded("limit".into(), "1".into()),
    ])
}

pub fn genre_search_query(genre: &str, item_type: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), format!("genre:{genre}")),
        Matcher::UrlEncoded("type".into(), item_type.into()),
        Matcher::UrlEncoded("limit".into(), "10".into()),
    ])
}
