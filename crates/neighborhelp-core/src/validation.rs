// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pre-flight input validation. Anything rejected here is shown inline and
// never sent to the server.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted by the sign-in and profile forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form rejected before any network call. `Display` is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("All fields are required for Sign Up")]
    MissingRegistrationFields,

    #[error("All fields are required")]
    MissingProfileFields,

    #[error("Service name is required")]
    MissingServiceName,

    #[error("Please select a rating!")]
    MissingRating,
}

/// Same shape the sign-in form has always accepted: something@something.tld,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
    regex.is_match(email)
}

/// Email must be present and well formed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Returns true when every field is non-empty.
pub fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("asha example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("asha@@example.com"));
    }

    #[test]
    fn validate_email_distinguishes_missing_from_malformed() {
        assert_eq!(validate_email(""), Err(ValidationError::MissingEmail));
        assert_eq!(validate_email("nope"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ok@example.org"), Ok(()));
    }

    #[test]
    fn password_length_counts_chars() {
        assert_eq!(
            validate_password_length("12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_password_length("123456"), Ok(()));
        assert_eq!(validate_password_length("éééééé"), Ok(()));
    }

    #[test]
    fn messages_match_ui_copy() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            ValidationError::MissingRating.to_string(),
            "Please select a rating!"
        );
    }
}
