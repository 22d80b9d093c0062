//! Configuration management for Datify.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides the Spotify client credentials used for
//! the token exchange and the endpoints every catalog request is sent to.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (endpoints and market only)

use std::{env, path::PathBuf};

use crate::error::{DatifyError, Result};

/// Default base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL of the Spotify accounts token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Market used for top tracks and artist albums when `SPOTIFY_MARKET` is unset.
pub const DEFAULT_MARKET: &str = "US";

/// Required environment variables for the token exchange
const REQUIRED_ENV_VARS: &[&str] = &["CLIENT_ID", "CLIENT_SECRET"];

/// Loads environment variables from `.env` files.
///
/// The `.env` in the working directory is read first, then the one located in
/// the platform-specific local data directory under `datify/.env`. Variables
/// that are already set are never overwritten, so the working directory file
/// wins over the data directory file. Missing files are not an error; missing
/// variables are reported once they are needed.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/datify/.env`
/// - macOS: `~/Library/Application Support/datify/.env`
/// - Windows: `%LOCALAPPDATA%/datify/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> std::result::Result<(), String> {
    dotenv::dotenv().ok();

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the local data directory of the application (`<data_local_dir>/datify`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("datify");
    path
}

/// Returns the directory browser charts are written to.
pub fn charts_dir() -> PathBuf {
    data_dir().join("charts")
}

/// Client id and secret of a registered Spotify application.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `CLIENT_ID` and `CLIENT_SECRET` from the environment.
    ///
    /// # Errors
    ///
    /// Returns `DatifyError::MissingEnvVar` listing every variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|name| non_empty_var(name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(DatifyError::MissingEnvVar(missing.join(", ")));
        }

        Ok(Self {
            client_id: non_empty_var("CLIENT_ID").unwrap_or_default(),
            client_secret: non_empty_var("CLIENT_SECRET").unwrap_or_default(),
        })
    }
}

/// Where requests go and which market they ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub token_url: String,
    pub market: String,
}

impl Endpoints {
    /// Builds endpoints for the given API and token URLs with the default market.
    ///
    /// Trailing slashes are stripped from `api_url` so paths can be appended
    /// directly.
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
            market: DEFAULT_MARKET.to_string(),
        }
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Reads `SPOTIFY_API_URL`, `SPOTIFY_API_TOKEN_URL` and `SPOTIFY_MARKET`,
    /// falling back to the public Spotify endpoints and the `US` market.
    pub fn from_env() -> Self {
        Self::new(
            non_empty_var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            non_empty_var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        )
        .with_market(non_empty_var("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_MARKET.to_string()))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TOKEN_URL)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
