use serde::Deserialize;
use std::fmt;

/// Error body returned by the Spotify Web API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    pub message: String,
}

#[derive(Debug)]
pub enum DatifyError {
    /// One or more required environment variables are unset or empty
    MissingEnvVar(String),
    /// The client-credentials exchange failed or returned no access token
    Auth(String),
    /// Transport level failure while talking to the API
    Http(reqwest::Error),
    /// The API answered with a non-success status
    Api { status: u16, message: String },
    /// The response body did not have the expected key path
    Shape {
        endpoint: String,
        source: serde_json::Error,
    },
    /// An endpoint that is expected to return items returned none
    EmptyResult(String),
    /// Unknown mode letter or result type typed at a prompt
    InvalidInput(String),
    /// Prompt or chart file I/O
    Io(std::io::Error),
    /// The chart could not be shown
    Chart(String),
}

impl std::error::Error for DatifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatifyError::Http(e) => Some(e),
            DatifyError::Shape { source, .. } => Some(source),
            DatifyError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for DatifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatifyError::MissingEnvVar(vars) => write!(
                f,
                "Missing required environment variable: {vars}\n\
                 Please set it in your environment or .env file"
            ),
            DatifyError::Auth(msg) => write!(f, "Authentication failed: {msg}"),
            DatifyError::Http(e) => write!(f, "HTTP error: {e}"),
            DatifyError::Api { status, message } => {
                write!(f, "Spotify API error {status}: {message}")
            }
            DatifyError::Shape { endpoint, source } => {
                write!(f, "Unexpected response from {endpoint}: {source}")
            }
            DatifyError::EmptyResult(what) => write!(f, "No {what} were returned"),
            DatifyError::InvalidInput(msg) => write!(f, "{msg}"),
            DatifyError::Io(e) => write!(f, "I/O error: {e}"),
            DatifyError::Chart(msg) => write!(f, "Cannot show chart: {msg}"),
        }
    }
}

impl From<reqwest::Error> for DatifyError {
    fn from(err: reqwest::Error) -> Self {
        DatifyError::Http(err)
    }
}

impl From<std::io::Error> for DatifyError {
    fn from(err: std::io::Error) -> Self {
        DatifyError::Io(err)
    }
}

/// Helper type for Result with `DatifyError`
pub type Result<T> = std::result::Result<T, DatifyError>;
