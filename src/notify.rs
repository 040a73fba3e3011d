//! User-facing notices (toast messages).

use serde::{Deserialize, Serialize};

/// Shown when the backend failed without a usable message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Error => "toast toast-error",
            NoticeLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice; a blank message is replaced by [`GENERIC_ERROR`].
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            message
        };
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
