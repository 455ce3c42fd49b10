use crate::redact::transport_message;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration (base URL, HTTP client construction).
    #[error("config error: {0}")]
    Config(String),

    /// An authenticated client was requested without a credential.
    #[error("TOLENO_API_KEY is required for authenticated tools")]
    MissingCredential,

    /// Connection-level failure (DNS, refused connection, TLS, timeout).
    #[error("http transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON. `snippet` holds at most 200 characters of it.
    #[error("Failed to parse API response: {snippet}")]
    Parse { snippet: String },

    /// The API answered with an HTTP status `>= 400` (authenticated client only).
    #[error("{message}")]
    Remote {
        message: String,
        status: u16,
        data: Value,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// HTTP status reported by the remote service, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured error payload returned by the remote service, if any.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Remote { data, .. } => Some(data),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(transport_message(value))
    }
}
