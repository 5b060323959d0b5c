// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for NeighborHelp.

use thiserror::Error;

use crate::validation::ValidationError;

/// Top-level error type for all NeighborHelp operations.
#[derive(Debug, Error)]
pub enum NeighborHelpError {
    // -- Pre-flight errors (never reach the network) --
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not signed in")]
    NotAuthenticated,

    // -- Remote API --
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    // -- Local configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NeighborHelpError {
    /// The server-provided message, if this is an API error that carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NeighborHelpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_api_errors() {
        let err = NeighborHelpError::Api {
            status: 400,
            message: Some("User already exists".into()),
        };
        assert_eq!(err.server_message(), Some("User already exists"));

        let blank = NeighborHelpError::Api {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.server_message(), None);

        let transport = NeighborHelpError::Transport("connection refused".into());
        assert_eq!(transport.server_message(), None);
    }

    #[test]
    fn api_error_display_without_message() {
        let err = NeighborHelpError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "API returned status 502: no message");
    }
}
