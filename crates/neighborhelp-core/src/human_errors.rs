// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing messages.
//
// Request failures are not classified further: the server's own `message`
// is shown when it sent one, otherwise the caller's fallback text.

use crate::error::NeighborHelpError;

/// Generic fallback for a failed request.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Colour of an inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A transient inline message under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.tone == Tone::Success
    }

    /// CSS colour for the message text.
    pub fn colour(&self) -> &'static str {
        match self.tone {
            Tone::Success => "#16a34a",
            Tone::Error => "#ef4444",
        }
    }
}

/// The text to show for `err`.
///
/// Validation messages are always shown verbatim. For request failures the
/// server message wins over `fallback`.
pub fn user_message(err: &NeighborHelpError, fallback: &str) -> String {
    match err {
        NeighborHelpError::Validation(v) => v.to_string(),
        NeighborHelpError::NotAuthenticated => "Please sign in again.".into(),
        other => other
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
    }
}

/// Shorthand for an error [`Notice`] built by [`user_message`].
pub fn error_notice(err: &NeighborHelpError, fallback: &str) -> Notice {
    Notice::error(user_message(err, fallback))
}
