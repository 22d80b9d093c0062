//! # Spotify Integration Module
//!
//! This module is the integration layer between Datify and the Spotify Web API.
//! It obtains an app token with the client-credentials grant and issues the
//! catalog GET requests the session needs, decoding each response into the
//! typed shapes in [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Session Driver (cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Artist Operations (search, top tracks, albums, related)
//!     └── Genre Operations (tracks, albums, artists by genre tag)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - exchanges the client id/secret pair for a bearer token
//! - [`artists`] - artist search and artist detail endpoints
//! - [`genres`] - `genre:` searches for tracks, albums and artists
//!
//! ## Requests
//!
//! Every catalog request goes through [`Catalog::get`]. It attaches the bearer
//! token, turns non-success statuses into [`DatifyError::Api`] and bodies that
//! lack the expected key path into [`DatifyError::Shape`]. Requests are issued
//! strictly one after another; there is no caching and no retry.
//!
//! Path segments and query values typed by the user are percent-encoded with
//! [`encode`] before they are placed in a URL.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /search` - artist lookup and genre searches
//! - `GET /artists/{id}/top-tracks` - top tracks of an artist
//! - `GET /audio-features/{id}` - tempo of a single track
//! - `GET /artists/{id}/albums` - albums and singles of an artist
//! - `GET /artists/{id}/related-artists` - artists similar to an artist

pub mod artists;
pub mod auth;
pub mod genres;

use std::borrow::Cow;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::{Credentials, Endpoints},
    error::{ApiErrorBody, DatifyError, Result},
};

/// Authenticated handle on the Spotify catalog.
///
/// Holds the HTTP client, the configured endpoints and the bearer token that
/// was obtained once for this run. The token is never refreshed.
#[derive(Debug, Clone)]
pub struct Catalog {
    client: Client,
    endpoints: Endpoints,
    token: String,
}

impl Catalog {
    /// Obtains a token for `credentials` and returns a catalog using it.
    ///
    /// # Errors
    ///
    /// Returns `DatifyError::Auth` if the token exchange is rejected or the
    /// response carries no access token, `DatifyError::Http` on transport errors.
    pub async fn connect(endpoints: Endpoints, credentials: &Credentials) -> Result<Self> {
        let client = Client::new();
        let token = auth::get_token(&client, &endpoints.token_url, credentials).await?;
        Ok(Self {
            client,
            endpoints,
            token: token.access_token,
        })
    }

    /// Wraps an already obtained access token.
    pub fn with_token(endpoints: Endpoints, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoints,
            token: token.into(),
        }
    }

    /// Issues an authenticated GET for `path_and_query` and decodes the body into `T`.
    ///
    /// `path_and_query` is appended to the configured API URL as is, so every
    /// user supplied value in it must already be encoded.
    ///
    /// # Errors
    ///
    /// - `DatifyError::Http` - network failure or unreadable body
    /// - `DatifyError::Api` - any non-2xx status, with Spotify's error message if present
    /// - `DatifyError::Shape` - body is not JSON of the expected shape
    pub(crate) async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.endpoints.api_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_error) => api_error.error.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(DatifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| DatifyError::Shape {
            endpoint: endpoint_name(path_and_query).to_string(),
            source,
        })
    }
}

/// Percent-encodes a value for use in a path segment or query string.
pub fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn endpoint_name(path_and_query: &str) -> &str {
    path_and_query
        .split_once('?')
        .map_or(path_and_query, |(path, _)| path)
}
