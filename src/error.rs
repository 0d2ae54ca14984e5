use thiserror::Error;

/// Failure of a single upstream fetch.
///
/// `Transport` and `Status` are transport-level failures (the request never
/// produced a usable response); `Payload` means a response arrived but its
/// body could not be understood.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request failed with status: {0}")]
    Status(u16),

    #[error("Unexpected API response: {0}")]
    Payload(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Payload(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport(format!("timed out: {}", err))
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
