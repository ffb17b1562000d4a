use thiserror::Error;

/// Ways a backend call can fail before yielding a usable body.
///
/// `Clone + PartialEq` so results can travel inside flow events and be compared
/// in tests; the underlying `reqwest::Error` is flattened to its message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `detail` is the `error` or
    /// `message` field of the body, when the body carried one.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never completed (network failure, CORS, aborted fetch).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        Self::Decode(err.to_string())
    }

    /// Server-supplied detail, if any. Used for logging only: the UI maps every
    /// transport-class failure to a fixed message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
