use std::error::Error as StdError;
use thiserror::Error;

/// Result type for Q-Fleet client operations
pub type Result<T> = std::result::Result<T, QFleetError>;

/// Errors that can occur when using the Q-Fleet client
#[derive(Error, Debug)]
pub enum QFleetError {
    /// No response arrived within the client timeout
    #[error("Request timed out. The backend is likely starting up, please try again in a minute.")]
    Timeout,

    /// The service answered with a non-success status
    #[error("API Error: {status} - {detail}")]
    RemoteError { status: u16, detail: String },

    /// The request could not complete (network failure, malformed response)
    #[error("{0}")]
    Transport(String),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl QFleetError {
    /// Whether the call ran out of time, which usually means the service is cold-starting
    pub fn is_timeout(&self) -> bool {
        matches!(self, QFleetError::Timeout)
    }
}

impl From<reqwest::Error> for QFleetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return QFleetError::Timeout;
        }
        QFleetError::Transport(error_chain(&err))
    }
}

/// Join an error and its sources, reqwest hides the interesting part in the chain
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
