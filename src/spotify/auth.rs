use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Credentials,
    error::{DatifyError, Result},
    types::Token,
};

/// Exchanges the application's client id and secret for a bearer token.
///
/// Implements the OAuth 2.0 client-credentials grant: the `id:secret` pair is
/// base64-encoded into a `Basic` authorization header and posted to the token
/// endpoint together with the form body `grant_type=client_credentials`.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `token_url` - Spotify accounts token endpoint
/// * `credentials` - Client id and secret of the registered application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token and its lifetime in seconds
/// - `Err(DatifyError)` - Missing credentials, rejected exchange or transport error
///
/// # Error Handling
///
/// - Empty id or secret fail with `DatifyError::Auth` before any request is sent
/// - A non-success status fails with `DatifyError::Auth` carrying the status
///   code and the `error_description` Spotify returned, or the status reason
///   when the body is not JSON
/// - A body without a string `access_token` fails with `DatifyError::Auth`
///
/// # Token Lifetime
///
/// The token is obtained once per run and never refreshed. A missing
/// `expires_in` defaults to 3600 seconds.
///
/// # Example
///
/// ```
/// let credentials = Credentials::from_env()?;
/// let token = get_token(&Client::new(), config::DEFAULT_TOKEN_URL, &credentials).await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn get_token(client: &Client, token_url: &str, credentials: &Credentials) -> Result<Token> {
    if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
        return Err(DatifyError::Auth(
            "client id and client secret must not be empty".to_string(),
        ));
    }

    let res = client
        .post(token_url)
        .header("Authorization", format!("Basic {}", basic_auth(credentials)))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        let reason = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| {
                json["error_description"]
                    .as_str()
                    .or_else(|| json["error"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("token request rejected")
                    .to_string()
            });
        return Err(DatifyError::Auth(format!("{}: {reason}", status.as_u16())));
    }

    let json: Value = serde_json::from_str(&body)
        .map_err(|e| DatifyError::Auth(format!("token response is not JSON: {e}")))?;

    let access_token = json["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DatifyError::Auth("response has no access_token".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
    })
}

/// Base64 value of the `Basic` authorization header for `credentials`.
pub fn basic_auth(credentials: &Credentials) -> String {
    STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ))
}
