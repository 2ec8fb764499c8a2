//! Error types for the AYU-Sync API client.
//!
//! # Design
//! Non-2xx responses carry an optional `detail` string because the backend
//! (FastAPI-style) attaches one to its error bodies; callers rendering a
//! translate failure prefer that message over a generic one. `Transport` is
//! constructed by the host when the round-trip itself failed, so network
//! errors flow through the same rendering path as status and decode errors.

use std::fmt;

/// Errors surfaced by `CodeMapClient` parse methods and host executors.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status. `detail` holds the backend's
    /// error message when the body carried one.
    Rejected { status: u16, detail: Option<String> },

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The HTTP round-trip itself failed (connection refused, DNS, ...).
    /// Built by the host, never by the core.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {status}: {detail}"),
            ApiError::Rejected {
                status,
                detail: None,
            } => write!(f, "HTTP {status}"),
            ApiError::Decode(msg) => write!(f, "failed to decode response body: {msg}"),
            ApiError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_detail_when_present() {
        let err = ApiError::Rejected {
            status: 404,
            detail: Some("Code 'X' not found in either system.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404: Code 'X' not found in either system."
        );
    }

    #[test]
    fn rejected_display_without_detail_is_just_the_status() {
        let err = ApiError::Rejected {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn transport_display_is_the_raw_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
