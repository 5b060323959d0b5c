// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sign in / sign up / sign out.

use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::forms::{AuthForm, AuthMode};
use neighborhelp_core::human_errors::{self, GENERIC_FAILURE, Notice};
use neighborhelp_session::SessionStore;
use tracing::{info, warn};

use crate::api::MarketplaceApi;

/// Validate, call login or register, and store the issued session.
///
/// Nothing is sent when validation fails. On success the caller shows the
/// returned notice and navigates to the dashboard after the configured delay.
pub async fn submit<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    mode: AuthMode,
    form: &AuthForm,
) -> Result<Notice> {
    form.validate(mode)?;

    let issued = match mode {
        AuthMode::Login => api.login(&form.login_request()).await,
        AuthMode::Register => api.register(&form.register_request()).await,
    }
    .inspect_err(|e| warn!(?mode, error = %e, "authentication failed"))?;

    info!(?mode, user_id = %issued.user_info.id, "authenticated");
    session.set_session(issued.token, issued.user_info);
    Ok(Notice::success(mode.success_message()))
}

/// Inline message for a failed submit.
pub fn failure_notice(err: &NeighborHelpError) -> Notice {
    human_errors::error_notice(err, GENERIC_FAILURE)
}

/// Drop the session. Subscribed views redirect to sign-in on their own.
pub fn sign_out(session: &SessionStore) {
    session.clear_session();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, TOKEN};
    use neighborhelp_core::types::Role;

    fn form(email: &str, password: &str) -> AuthForm {
        AuthForm {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_network() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();

        let err = submit(&api, &session, AuthMode::Login, &form("", ""))
            .await
            .expect_err("blocked");
        assert_eq!(failure_notice(&err).text, "Email and password are required");
        assert!(api.calls().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn short_password_blocked() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();

        let err = submit(&api, &session, AuthMode::Login, &form("ravi@example.com", "123"))
            .await
            .expect_err("blocked");
        assert_eq!(
            failure_notice(&err).text,
            "Password must be at least 6 characters long"
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn incomplete_registration_blocked() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();
        let mut registration = form("new@example.com", "secret1");
        registration.name = "Meera".into();

        let err = submit(&api, &session, AuthMode::Register, &registration)
            .await
            .expect_err("blocked");
        assert_eq!(failure_notice(&err).text, "All fields are required for Sign Up");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn login_persists_token() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();

        let notice = submit(&api, &session, AuthMode::Login, &form("ravi@example.com", "secret1"))
            .await
            .expect("login");
        assert!(notice.is_success());
        assert_eq!(notice.text, "Login successful!");
        assert_eq!(session.token().as_deref(), Some(TOKEN));
        assert_eq!(api.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn registration_sends_role_and_signs_in() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();
        let registration = AuthForm {
            name: "Meera".into(),
            phone: "555-0199".into(),
            address: "7 Lake View".into(),
            role: Role::Consumer,
            ..form("meera@example.com", "secret1")
        };

        let notice = submit(&api, &session, AuthMode::Register, &registration)
            .await
            .expect("register");
        assert_eq!(notice.text, "Account created!");
        assert_eq!(
            api.state().last_register.as_ref().map(|r| r.role),
            Some(Role::Consumer)
        );
        assert_eq!(
            session.user_info().map(|u| u.email).as_deref(),
            Some("meera@example.com")
        );
    }

    #[tokio::test]
    async fn server_message_shown_on_rejection() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();

        let err = submit(&api, &session, AuthMode::Login, &form("nobody@example.com", "secret1"))
            .await
            .expect_err("rejected");
        assert_eq!(failure_notice(&err).text, "Invalid email or password");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn generic_fallback_without_server_message() {
        let api = FakeApi::new();
        api.fail("login", None);
        let session = SessionStore::in_memory();

        let err = submit(&api, &session, AuthMode::Login, &form("ravi@example.com", "secret1"))
            .await
            .expect_err("rejected");
        assert_eq!(failure_notice(&err).text, "Something went wrong");
    }

    #[tokio::test]
    async fn sign_out_clears_token() {
        let api = FakeApi::new();
        let session = SessionStore::in_memory();
        submit(&api, &session, AuthMode::Login, &form("ravi@example.com", "secret1"))
            .await
            .expect("login");

        sign_out(&session);
        assert_eq!(session.token(), None);
        assert_eq!(
            crate::routing::resolve(&crate::routing::Destination::Profile, session.is_authenticated()),
            crate::routing::Resolution::Redirect(crate::routing::Destination::Auth)
        );
    }
}
