use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, connection, CORS, abort).
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// The response body could not be decoded.
    Decode,
    Unauthorized,
    Forbidden,
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Http => write!(f, "Http"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured application error used by the console core and the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status for `Http` errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    /// A non-2xx response. 401 and 403 are mapped to their own kinds.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            _ => AppErrorKind::Http,
        };
        Self {
            kind,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self.kind {
            AppErrorKind::Network => true,
            AppErrorKind::Http => self.status.map(|s| s >= 500 || s == 429).unwrap_or(false),
            _ => false,
        }
    }

    /// A message suitable for showing in a form. Server text is never echoed.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Unauthorized => "Bad email or password.".to_string(),
            AppErrorKind::Forbidden => "You do not have access to this area.".to_string(),
            AppErrorKind::Network => "Could not reach the server. Check your connection.".to_string(),
            _ if self.is_transient() => "The server is busy. Please try again in a moment.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(err.to_string())
    }
}
