// crates/monocut-api/src/error.rs
//
// Every failure the client can produce, and the single policy that turns one
// into the text the user sees:
//
//   1. a non-blank `detail` string from the backend, verbatim
//   2. otherwise the transport-level description
//   3. otherwise UNKNOWN_ERROR

use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "未知错误";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    /// Connection, timeout, TLS or body read failure.
    #[error("{0}")]
    Transport(String),

    /// A 2xx body that does not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }

    /// The backend's own explanation, if it gave one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail: Some(d), .. } if !d.trim().is_empty() => Some(d),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        non_blank(self.to_string()).unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// Apply the message policy to any error. `ApiError`s anywhere in the source
/// chain get the full treatment; other errors contribute their own text.
pub fn extract_error_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(api) = e.downcast_ref::<ApiError>() {
            return api.user_message();
        }
        current = e.source();
    }
    non_blank(err.to_string()).unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
