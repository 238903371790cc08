use thiserror::Error;

/// Failures talking to the clinic API. None of these are fatal; the caller
/// keeps its local state and reports a generic notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => RemoteError::Auth(message),
            404 => RemoteError::NotFound(message),
            _ => RemoteError::Api { status, message },
        }
    }
}
