use serde::Deserialize;

use crate::notify::{Notice, GENERIC_ERROR};

/// Failure talking to the school backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Network(String),
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected backend response: {0}")]
    Decode(String),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Server { status: 404, .. })
    }

    /// Text for the user: the server's `message` verbatim when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Server {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    pub fn to_notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BackendError::Decode(e.to_string())
        } else {
            BackendError::Network(e.to_string())
        }
    }
}

/// Error body shape: `{"message": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
